//! Typed failures for the query engine and playlist operations.
//!
//! Application code wraps these in `anyhow::Error` at the command boundary;
//! the library keeps them typed so callers can tell a bad filter apart from
//! a failed fetch.

use thiserror::Error;

/// Errors raised while resolving abbreviations or parsing filter/sort strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Empty, absent, or unregistered abbreviation.
    #[error("no entry found for '{0}'")]
    NotFound(String),

    /// Malformed filter clause, or a clause naming an unknown field/operator.
    #[error("invalid filter clause '{clause}': {reason}")]
    InvalidFilter { clause: String, reason: String },

    /// Sort clause naming an unknown field.
    #[error("invalid sort clause '{clause}': {reason}")]
    InvalidSort { clause: String, reason: String },
}

impl QueryError {
    pub(crate) fn invalid_filter(clause: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFilter {
            clause: clause.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_sort(clause: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSort {
            clause: clause.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by playlist-level commands.
#[derive(Error, Debug)]
pub enum PlaylistError {
    /// A playlist the command needs does not exist.
    #[error("playlist '{0}' not found")]
    NotFound(String),

    /// The music service rejected or failed a request.
    #[error("music service error: {0}")]
    Service(String),
}
