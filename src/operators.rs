//! Operator registry and comparison dispatch.
//!
//! Each [`FilterType`] is bound to a pure comparison function through a
//! static table, looked up by [`comparator`]. String comparisons are
//! case-insensitive; numeric comparisons coerce both sides to integers and
//! treat anything that will not coerce as a non-match.

use crate::error::QueryError;
use crate::lookup::PrefixLookup;
use crate::record::FieldValue;
use std::collections::HashMap;

/// Comparison operators available in filter clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterType {
    Contains,
    Equals,
    Starts,
    Ends,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
}

impl FilterType {
    pub const ALL: [FilterType; 8] = [
        FilterType::Contains,
        FilterType::Equals,
        FilterType::Starts,
        FilterType::Ends,
        FilterType::Greater,
        FilterType::GreaterEqual,
        FilterType::Less,
        FilterType::LessEqual,
    ];

    /// Whether the operator compares integers rather than text.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            FilterType::Greater | FilterType::GreaterEqual | FilterType::Less | FilterType::LessEqual
        )
    }
}

/// `(test_value, actual_value) -> matches`
pub type CompareFn = fn(&str, &FieldValue) -> bool;

lazy_static::lazy_static! {
    static ref FILTER_LOOKUP: PrefixLookup<FilterType> = PrefixLookup::new(&[
        ("c", FilterType::Contains),
        ("con", FilterType::Contains),
        ("contains", FilterType::Contains),
        ("eq", FilterType::Equals),
        ("equals", FilterType::Equals),
        ("s", FilterType::Starts),
        ("st", FilterType::Starts),
        ("starts", FilterType::Starts),
        ("en", FilterType::Ends),
        ("end", FilterType::Ends),
        ("ends", FilterType::Ends),
        ("gt", FilterType::Greater),
        ("gr", FilterType::Greater),
        ("greater", FilterType::Greater),
        ("ge", FilterType::GreaterEqual),
        ("geq", FilterType::GreaterEqual),
        ("lt", FilterType::Less),
        ("less", FilterType::Less),
        ("leq", FilterType::LessEqual),
    ]);

    static ref COMPARATORS: HashMap<FilterType, CompareFn> = {
        let mut table: HashMap<FilterType, CompareFn> = HashMap::new();
        table.insert(FilterType::Contains, contains);
        table.insert(FilterType::Equals, equals);
        table.insert(FilterType::Starts, starts);
        table.insert(FilterType::Ends, ends);
        table.insert(FilterType::Greater, greater);
        table.insert(FilterType::GreaterEqual, greater_equal);
        table.insert(FilterType::Less, less);
        table.insert(FilterType::LessEqual, less_equal);
        table
    };
}

/// Operator abbreviation table.
#[must_use]
pub fn filter_lookup() -> &'static PrefixLookup<FilterType> {
    &FILTER_LOOKUP
}

/// Resolve an operator abbreviation such as `"eq"` or `"geq"`.
///
/// # Errors
///
/// [`QueryError::NotFound`] for empty, absent, or unknown tokens.
pub fn find_filter_type<'a>(token: impl Into<Option<&'a str>>) -> Result<FilterType, QueryError> {
    FILTER_LOOKUP.find(token)
}

/// The comparison function bound to `filter_type`.
#[must_use]
pub fn comparator(filter_type: FilterType) -> CompareFn {
    // Unreachable: every variant is registered, and the tests check it.
    COMPARATORS.get(&filter_type).copied().unwrap_or(never)
}

fn never(_: &str, _: &FieldValue) -> bool {
    false
}

fn contains(test: &str, actual: &FieldValue) -> bool {
    actual.folded().contains(&test.to_lowercase())
}

fn equals(test: &str, actual: &FieldValue) -> bool {
    actual.folded() == test.to_lowercase()
}

fn starts(test: &str, actual: &FieldValue) -> bool {
    actual.folded().starts_with(&test.to_lowercase())
}

fn ends(test: &str, actual: &FieldValue) -> bool {
    actual.folded().ends_with(&test.to_lowercase())
}

fn numeric_pair(test: &str, actual: &FieldValue) -> Option<(i64, i64)> {
    Some((test.trim().parse().ok()?, actual.as_integer()?))
}

fn greater(test: &str, actual: &FieldValue) -> bool {
    numeric_pair(test, actual).is_some_and(|(test, actual)| actual > test)
}

fn greater_equal(test: &str, actual: &FieldValue) -> bool {
    numeric_pair(test, actual).is_some_and(|(test, actual)| actual >= test)
}

fn less(test: &str, actual: &FieldValue) -> bool {
    numeric_pair(test, actual).is_some_and(|(test, actual)| actual < test)
}

fn less_equal(test: &str, actual: &FieldValue) -> bool {
    numeric_pair(test, actual).is_some_and(|(test, actual)| actual <= test)
}
