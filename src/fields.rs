//! Field registry: the fixed set of filterable/sortable playlist fields.

use crate::error::QueryError;
use crate::lookup::PrefixLookup;
use std::fmt;

/// How a field's raw values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    String,
    Numeric,
}

/// Canonical playlist record fields.
///
/// Declaration order is the canonical enumeration order: the filter
/// evaluator narrows by fields in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    PlaylistName,
    Size,
    Owner,
    PlaylistDescription,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::PlaylistName,
        FieldName::Size,
        FieldName::Owner,
        FieldName::PlaylistDescription,
    ];

    #[must_use]
    pub const fn data_type(self) -> DataType {
        match self {
            FieldName::Size => DataType::Numeric,
            FieldName::PlaylistName | FieldName::Owner | FieldName::PlaylistDescription => {
                DataType::String
            }
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldName::PlaylistName => "name",
            FieldName::Size => "size",
            FieldName::Owner => "owner",
            FieldName::PlaylistDescription => "description",
        };
        f.write_str(label)
    }
}

/// Sort direction for a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortType {
    #[default]
    Ascending,
    Descending,
}

lazy_static::lazy_static! {
    static ref FIELD_LOOKUP: PrefixLookup<FieldName> = PrefixLookup::new(&[
        ("n", FieldName::PlaylistName),
        ("name", FieldName::PlaylistName),
        ("p", FieldName::PlaylistName),
        ("playlistname", FieldName::PlaylistName),
        ("s", FieldName::Size),
        ("size", FieldName::Size),
        ("c", FieldName::Size),
        ("count", FieldName::Size),
        ("t", FieldName::Size),
        ("tracks", FieldName::Size),
        ("o", FieldName::Owner),
        ("owner", FieldName::Owner),
        ("d", FieldName::PlaylistDescription),
        ("desc", FieldName::PlaylistDescription),
        ("description", FieldName::PlaylistDescription),
    ]);

    static ref SORT_LOOKUP: PrefixLookup<SortType> = PrefixLookup::new(&[
        ("a", SortType::Ascending),
        ("asc", SortType::Ascending),
        ("ascending", SortType::Ascending),
        ("r", SortType::Descending),
        ("rev", SortType::Descending),
        ("reverse", SortType::Descending),
        ("d", SortType::Descending),
        ("desc", SortType::Descending),
        ("descending", SortType::Descending),
    ]);
}

/// Field abbreviation table.
#[must_use]
pub fn field_lookup() -> &'static PrefixLookup<FieldName> {
    &FIELD_LOOKUP
}

/// Sort direction abbreviation table.
#[must_use]
pub fn sort_lookup() -> &'static PrefixLookup<SortType> {
    &SORT_LOOKUP
}

/// Resolve a field abbreviation such as `"n"` or `"size"`.
///
/// # Errors
///
/// [`QueryError::NotFound`] for empty, absent, or unknown tokens.
pub fn find_field<'a>(token: impl Into<Option<&'a str>>) -> Result<FieldName, QueryError> {
    FIELD_LOOKUP.find(token)
}

/// Resolve a sort direction token. Anything unrecognized is ascending.
#[must_use]
pub fn find_sort_type<'a>(token: impl Into<Option<&'a str>>) -> SortType {
    SORT_LOOKUP.find(token).unwrap_or_default()
}
