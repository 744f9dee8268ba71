//! Playlist records as seen by the filter and sort evaluators.
//!
//! A record is a loose `FieldName -> FieldValue` map. Values are not type
//! checked on the way in; coercion happens at comparison time.

use crate::fields::FieldName;
use crate::model::Playlist;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Raw value stored under a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    /// Lower-cased text form used by the string operators.
    #[must_use]
    pub fn folded(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Integer form used by the numeric operators.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Numeric ordering when both sides coerce, case-sensitive text otherwise.
    #[must_use]
    pub fn cmp_numeric(&self, other: &Self) -> Ordering {
        match (self.as_integer(), other.as_integer()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.cmp_text(other),
        }
    }

    #[must_use]
    pub fn cmp_text(&self, other: &Self) -> Ordering {
        self.to_string().cmp(&other.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n)
    }
}

/// One playlist row for listing, filtering, and sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistRecord {
    /// Service identifier; carried along for display, never filtered on.
    pub id: String,
    values: HashMap<FieldName, FieldValue>,
}

impl PlaylistRecord {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: HashMap::new(),
        }
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: FieldName, value: impl Into<FieldValue>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<FieldValue>) {
        self.values.insert(field, value.into());
    }

    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Display text for a field, empty when absent.
    #[must_use]
    pub fn text(&self, field: FieldName) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }
}

impl From<&Playlist> for PlaylistRecord {
    fn from(playlist: &Playlist) -> Self {
        let mut record = PlaylistRecord::new(playlist.id.clone());
        if let Some(name) = &playlist.name {
            record.set(FieldName::PlaylistName, name.as_str());
        }
        record.set(FieldName::Size, i64::from(playlist.tracks.total));
        record.set(FieldName::Owner, playlist.owner.id.as_str());
        if let Some(description) = &playlist.description {
            record.set(FieldName::PlaylistDescription, description.as_str());
        }
        record
    }
}
