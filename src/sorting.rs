//! Sort expressions for playlist listings.
//!
//! Grammar: comma-separated clauses, each `field` or `field:direction`.
//! Keys are most-significant first. Directions starting with `r`/`d`
//! (`rev`, `desc`, ...) sort descending; anything else sorts ascending.

use crate::error::QueryError;
use crate::fields::{find_field, find_sort_type, DataType, FieldName, SortType};
use crate::record::PlaylistRecord;
use log::debug;
use std::cmp::Ordering;

/// One sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortField {
    pub field: FieldName,
    pub sort_type: SortType,
}

impl SortField {
    #[must_use]
    pub const fn new(field: FieldName, sort_type: SortType) -> Self {
        Self { field, sort_type }
    }

    fn compare(&self, a: &PlaylistRecord, b: &PlaylistRecord) -> Ordering {
        let ordering = match (a.get(self.field), b.get(self.field)) {
            (Some(a), Some(b)) => match self.field.data_type() {
                DataType::Numeric => a.cmp_numeric(b),
                DataType::String => a.cmp_text(b),
            },
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };

        match self.sort_type {
            SortType::Ascending => ordering,
            SortType::Descending => ordering.reverse(),
        }
    }
}

/// Parse a sort expression. Empty or absent input yields no keys.
///
/// # Errors
///
/// [`QueryError::InvalidSort`] when a clause names an unknown field.
pub fn parse_sort_fields(raw: Option<&str>) -> Result<Vec<SortField>, QueryError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(|clause| -> Result<SortField, QueryError> {
            let clause = clause.trim();
            let mut tokens = clause.splitn(2, ':').map(str::trim);
            let field_token = tokens.next().unwrap_or_default().to_lowercase();
            let field = find_field(field_token.as_str())
                .map_err(|e| QueryError::invalid_sort(clause, format!("unknown field: {e}")))?;
            let sort_type = find_sort_type(tokens.next().map(str::to_lowercase).as_deref());
            Ok(SortField::new(field, sort_type))
        })
        .collect()
}

/// Stable multi-key sort of `records`.
#[must_use]
pub fn apply_sort(mut records: Vec<PlaylistRecord>, sort_fields: &[SortField]) -> Vec<PlaylistRecord> {
    if sort_fields.is_empty() {
        return records;
    }

    records.sort_by(|a, b| {
        sort_fields
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    debug!("Sorted {} record(s) by {} key(s)", records.len(), sort_fields.len());
    records
}

/// Parse `sort_spec` and sort `records` by it.
///
/// `None` and the empty string return `records` unchanged.
///
/// # Errors
///
/// See [`parse_sort_fields`].
pub fn sort_list(
    records: Vec<PlaylistRecord>,
    sort_spec: Option<&str>,
) -> Result<Vec<PlaylistRecord>, QueryError> {
    let sort_fields = parse_sort_fields(sort_spec)?;
    Ok(apply_sort(records, &sort_fields))
}
