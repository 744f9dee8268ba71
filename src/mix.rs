//! Mix-merge: which tracks to append to a target playlist.
//!
//! The inputs are fully materialized track lists. The target's tracks and
//! every exclusion playlist's tracks form the exclusion set; source tracks
//! not in that set are emitted once each, in first-seen order.

use crate::model::TrackRef;
use std::collections::HashSet;
use std::fmt;

/// Practical per-request limit for appends.
pub const APPEND_BATCH_SIZE: usize = 100;

/// Non-fatal conditions met while merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeWarning {
    /// No playlist matched the source prefix.
    NoSources { prefix: String },
    /// Sources existed but every track was already present or excluded.
    NothingToAdd,
}

impl fmt::Display for MergeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSources { prefix } => write!(f, "no playlists found with the prefix '{prefix}'"),
            Self::NothingToAdd => write!(f, "no new tracks to add"),
        }
    }
}

/// Track ids from `sources` that are neither in `target` nor in any of
/// `exclusions`, de-duplicated, in source order.
#[must_use]
pub fn compute_append_batch(
    sources: &[Vec<TrackRef>],
    target: &[TrackRef],
    exclusions: &[Vec<TrackRef>],
) -> Vec<String> {
    let mut seen: HashSet<&str> = target
        .iter()
        .chain(exclusions.iter().flatten())
        .map(|track| track.id.as_str())
        .collect();

    let mut batch = Vec::new();
    for track in sources.iter().flatten() {
        // `insert` is false for excluded ids and for ids already emitted.
        if seen.insert(track.id.as_str()) {
            batch.push(track.id.clone());
        }
    }
    batch
}
