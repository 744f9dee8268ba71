//! Filter expressions for playlist listings.
//!
//! Grammar: comma-separated clauses, each `field:value` (implicit
//! *contains*) or `field:operator:value`. Whitespace around every token is
//! ignored. Field and operator tokens are abbreviations resolved by longest
//! prefix, e.g. `n:eq:Now`, `size:geq:300`, `desc:st:chill`.
//!
//! The whole expression is parsed and validated before any record is
//! examined; a bad clause fails the listing instead of being skipped.

use crate::error::QueryError;
use crate::fields::{find_field, DataType, FieldName};
use crate::operators::{comparator, find_filter_type, FilterType};
use crate::record::PlaylistRecord;
use log::debug;
use std::collections::BTreeMap;

/// One predicate: `field <filter_type> value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: FieldName,
    pub value: String,
    pub filter_type: FilterType,
}

impl FieldFilter {
    #[must_use]
    pub fn new(field: FieldName, value: impl Into<String>, filter_type: FilterType) -> Self {
        Self {
            field,
            value: value.into(),
            filter_type,
        }
    }

    /// Whether `record` satisfies this predicate. Missing fields never match.
    #[must_use]
    pub fn matches(&self, record: &PlaylistRecord) -> bool {
        record
            .get(self.field)
            .is_some_and(|actual| comparator(self.filter_type)(&self.value, actual))
    }
}

/// Predicates grouped by field. Iterates in canonical field order.
pub type FilterSet = BTreeMap<FieldName, Vec<FieldFilter>>;

/// Parse a filter expression. Empty or absent input yields an empty set.
///
/// # Errors
///
/// [`QueryError::InvalidFilter`] for a clause with the wrong number of
/// tokens, an unknown field or operator, or a numeric operator used on a
/// text field or with a non-integer value.
pub fn parse_filters(raw: Option<&str>) -> Result<FilterSet, QueryError> {
    let mut filters = FilterSet::new();
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(filters);
    };

    for clause in raw.split(',') {
        let filter = parse_clause(clause.trim())?;
        filters.entry(filter.field).or_default().push(filter);
    }

    debug!("Parsed filter expression '{raw}' into {} field group(s)", filters.len());
    Ok(filters)
}

fn parse_clause(clause: &str) -> Result<FieldFilter, QueryError> {
    let tokens: Vec<&str> = clause.split(':').map(str::trim).collect();

    let (field_token, filter_token, value) = match tokens.as_slice() {
        [field, value] => (*field, None, *value),
        [field, filter_type, value] => (*field, Some(*filter_type), *value),
        _ => {
            return Err(QueryError::invalid_filter(
                clause,
                format!("expected 'field:value' or 'field:operator:value', found {} token(s)", tokens.len()),
            ))
        }
    };

    let field = find_field(field_token.to_lowercase().as_str())
        .map_err(|e| QueryError::invalid_filter(clause, format!("unknown field: {e}")))?;

    let filter_type = match filter_token {
        None => FilterType::Contains,
        Some(token) => find_filter_type(token.to_lowercase().as_str())
            .map_err(|e| QueryError::invalid_filter(clause, format!("unknown operator: {e}")))?,
    };

    if filter_type.is_numeric() {
        if field.data_type() != DataType::Numeric {
            return Err(QueryError::invalid_filter(
                clause,
                format!("{filter_type:?} needs a numeric field; '{field}' is text"),
            ));
        }
        if value.parse::<i64>().is_err() {
            return Err(QueryError::invalid_filter(
                clause,
                format!("{filter_type:?} needs an integer value, got '{value}'"),
            ));
        }
    }

    Ok(FieldFilter::new(field, value, filter_type))
}

/// Narrow `records` by a filter set, field by field in canonical order.
///
/// Every predicate must hold for a record to survive. Relative order of the
/// surviving records is preserved.
#[must_use]
pub fn apply_filters(mut records: Vec<PlaylistRecord>, filters: &FilterSet) -> Vec<PlaylistRecord> {
    for (field, field_filters) in filters {
        for filter in field_filters {
            records.retain(|record| filter.matches(record));
        }
        debug!("{} record(s) left after filtering on {field}", records.len());
    }
    records
}

/// Parse `filter_spec` and apply it to `records`.
///
/// `None` and the empty string return `records` unchanged.
///
/// # Errors
///
/// See [`parse_filters`]. Nothing is filtered when parsing fails.
pub fn filter_list(
    records: Vec<PlaylistRecord>,
    filter_spec: Option<&str>,
) -> Result<Vec<PlaylistRecord>, QueryError> {
    let filters = parse_filters(filter_spec)?;
    if filters.is_empty() {
        return Ok(records);
    }
    Ok(apply_filters(records, &filters))
}
