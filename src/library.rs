//! File-backed [`MusicService`] implementation.
//!
//! `LocalLibrary` serves a JSON snapshot of a user's playlists page by page,
//! the same way the remote service does, and applies creations and appends
//! to the snapshot. The binary saves the snapshot back after a mutating
//! command; tests use it in memory.
//!
//! Snapshot layout:
//!
//! ```json
//! {
//!   "user_id": "cmayes",
//!   "playlists": [
//!     { "id": "...", "name": "Now", "owner": {"id": "cmayes"},
//!       "items": [ {"track": {"id": "3DrlHWCoFqHQYGwE8MWsuv"}} ] }
//!   ]
//! }
//! ```

use crate::error::PlaylistError;
use crate::model::{Owner, Page, Playlist, PlaylistItem, TrackCount};
use crate::service::MusicService;
use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of entries per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Largest id list accepted by a single add/replace call.
pub const MAX_ITEMS_PER_WRITE: usize = 100;

/// A playlist together with its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPlaylist {
    #[serde(flatten)]
    pub playlist: Playlist,
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

impl StoredPlaylist {
    fn sync_total(&mut self) {
        self.playlist.tracks.total = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
    }
}

/// On-disk library document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    pub user_id: String,
    #[serde(default)]
    pub playlists: Vec<StoredPlaylist>,
}

/// Record of a mutating call, kept for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteCall {
    Create { name: String, public: bool },
    Add { playlist_id: String, track_ids: Vec<String> },
    Replace { playlist_id: String, track_ids: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct LocalLibrary {
    snapshot: LibrarySnapshot,
    page_size: usize,
    path: Option<PathBuf>,
    writes: Vec<WriteCall>,
}

impl LocalLibrary {
    /// Wrap an in-memory snapshot.
    #[must_use]
    pub fn from_snapshot(mut snapshot: LibrarySnapshot) -> Self {
        for stored in &mut snapshot.playlists {
            stored.sync_total();
        }
        Self {
            snapshot,
            page_size: DEFAULT_PAGE_SIZE,
            path: None,
            writes: Vec::new(),
        }
    }

    /// Load a snapshot from `path`. [`LocalLibrary::save`] writes back there.
    pub fn open(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| {
            format!(
                "Failed to read playlist library at {}. Create it or pass --library.",
                path.display()
            )
        })?;
        let snapshot: LibrarySnapshot = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid playlist library JSON in {}", path.display()))?;

        debug!(
            "Loaded {} playlists for user '{}' from {}",
            snapshot.playlists.len(),
            snapshot.user_id,
            path.display()
        );

        let mut library = Self::from_snapshot(snapshot);
        library.path = Some(path.to_path_buf());
        Ok(library)
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Write the snapshot back to the file it was opened from.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            debug!("In-memory library; nothing to save");
            return Ok(());
        };

        let json = serde_json::to_string_pretty(&self.snapshot)
            .context("Failed to serialize playlist library")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write playlist library to {}", path.display()))?;
        info!("Saved playlist library to {}", path.display());
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> &LibrarySnapshot {
        &self.snapshot
    }

    /// Mutating calls made so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[WriteCall] {
        &self.writes
    }

    /// Track ids of the playlist named `name`, in order.
    #[must_use]
    pub fn track_ids_named(&self, name: &str) -> Option<Vec<String>> {
        self.snapshot
            .playlists
            .iter()
            .find(|stored| stored.playlist.name.as_deref() == Some(name))
            .map(|stored| {
                stored
                    .items
                    .iter()
                    .filter_map(|item| item.track_id().map(str::to_string))
                    .collect()
            })
    }

    fn page_of<T: Clone>(&self, items: &[T], offset: usize) -> Page<T> {
        let start = offset.min(items.len());
        let end = (start + self.page_size).min(items.len());
        Page {
            items: items[start..end].to_vec(),
            offset: start,
            next: (end < items.len()).then_some(end),
        }
    }

    fn stored(&self, playlist_id: &str) -> Result<&StoredPlaylist> {
        self.snapshot
            .playlists
            .iter()
            .find(|stored| stored.playlist.id == playlist_id)
            .ok_or_else(|| anyhow!("No playlist with id '{playlist_id}'"))
    }

    fn stored_mut(&mut self, playlist_id: &str) -> Result<&mut StoredPlaylist> {
        self.snapshot
            .playlists
            .iter_mut()
            .find(|stored| stored.playlist.id == playlist_id)
            .ok_or_else(|| anyhow!("No playlist with id '{playlist_id}'"))
    }

    fn new_playlist_id(&self) -> String {
        loop {
            let id: String = thread_rng()
                .sample_iter(&Alphanumeric)
                .take(22)
                .map(char::from)
                .collect();
            if self.stored(&id).is_err() {
                return id;
            }
        }
    }
}

fn check_write_size(track_ids: &[String]) -> Result<()> {
    if track_ids.len() > MAX_ITEMS_PER_WRITE {
        bail!(PlaylistError::Service(format!(
            "too many tracks in one request: {} (limit {MAX_ITEMS_PER_WRITE})",
            track_ids.len()
        )));
    }
    Ok(())
}

impl MusicService for LocalLibrary {
    fn current_user_id(&self) -> Result<String> {
        Ok(self.snapshot.user_id.clone())
    }

    fn current_user_playlists(&self) -> Result<Page<Playlist>> {
        let playlists: Vec<Playlist> = self
            .snapshot
            .playlists
            .iter()
            .map(|stored| stored.playlist.clone())
            .collect();
        Ok(self.page_of(&playlists, 0))
    }

    fn next_playlists(&self, page: &Page<Playlist>) -> Result<Option<Page<Playlist>>> {
        let Some(offset) = page.next else {
            return Ok(None);
        };
        let playlists: Vec<Playlist> = self
            .snapshot
            .playlists
            .iter()
            .map(|stored| stored.playlist.clone())
            .collect();
        Ok(Some(self.page_of(&playlists, offset)))
    }

    fn playlist_items(&self, playlist_id: &str) -> Result<Page<PlaylistItem>> {
        let stored = self.stored(playlist_id)?;
        Ok(self.page_of(&stored.items, 0))
    }

    fn next_items(
        &self,
        playlist_id: &str,
        page: &Page<PlaylistItem>,
    ) -> Result<Option<Page<PlaylistItem>>> {
        let Some(offset) = page.next else {
            return Ok(None);
        };
        let stored = self.stored(playlist_id)?;
        Ok(Some(self.page_of(&stored.items, offset)))
    }

    fn create_playlist(&mut self, user_id: &str, name: &str, public: bool) -> Result<Playlist> {
        let playlist = Playlist {
            id: self.new_playlist_id(),
            name: Some(name.to_string()),
            description: Some(String::new()),
            owner: Owner {
                id: user_id.to_string(),
                display_name: None,
            },
            tracks: TrackCount::default(),
            public: Some(public),
        };

        self.snapshot.playlists.push(StoredPlaylist {
            playlist: playlist.clone(),
            items: Vec::new(),
        });
        self.writes.push(WriteCall::Create {
            name: name.to_string(),
            public,
        });
        debug!("Created playlist '{name}' ({})", playlist.id);
        Ok(playlist)
    }

    fn add_items(&mut self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        check_write_size(track_ids)?;
        let stored = self.stored_mut(playlist_id)?;
        stored
            .items
            .extend(track_ids.iter().map(PlaylistItem::for_track));
        stored.sync_total();
        self.writes.push(WriteCall::Add {
            playlist_id: playlist_id.to_string(),
            track_ids: track_ids.to_vec(),
        });
        Ok(())
    }

    fn replace_items(&mut self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        check_write_size(track_ids)?;
        let stored = self.stored_mut(playlist_id)?;
        stored.items = track_ids.iter().map(PlaylistItem::for_track).collect();
        stored.sync_total();
        self.writes.push(WriteCall::Replace {
            playlist_id: playlist_id.to_string(),
            track_ids: track_ids.to_vec(),
        });
        Ok(())
    }
}
