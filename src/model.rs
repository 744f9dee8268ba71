//! Serde models for the playlist service's records.
//!
//! Field names follow the service's JSON so snapshots and fixtures can be
//! loaded with `serde_json` directly. Unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Playlist owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Track count summary attached to a playlist listing entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCount {
    pub total: u32,
}

/// Playlist listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: Owner,
    #[serde(default)]
    pub tracks: TrackCount,
    #[serde(default)]
    pub public: Option<bool>,
}

/// A track as embedded in a playlist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Absent for local files.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub added_at: Option<String>,
    /// Absent when the track was removed from the catalog.
    #[serde(default)]
    pub track: Option<Track>,
}

impl PlaylistItem {
    /// Convenience constructor for an item wrapping a catalog track.
    #[must_use]
    pub fn for_track(id: impl Into<String>) -> Self {
        Self {
            added_at: None,
            track: Some(Track {
                id: Some(id.into()),
                name: None,
            }),
        }
    }

    #[must_use]
    pub fn track_id(&self) -> Option<&str> {
        self.track.as_ref()?.id.as_deref()
    }
}

/// Track identity used for de-duplication, plus the item it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRef {
    pub id: String,
    pub item: PlaylistItem,
}

impl TrackRef {
    /// `None` for items that carry no track id.
    #[must_use]
    pub fn from_item(item: PlaylistItem) -> Option<Self> {
        let id = item.track_id()?.to_string();
        Some(Self { id, item })
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub offset: usize,
    /// Offset of the following page; `None` on the last page.
    #[serde(default)]
    pub next: Option<usize>,
}

impl<T> Page<T> {
    /// A single, final page.
    #[must_use]
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            offset: 0,
            next: None,
        }
    }
}
