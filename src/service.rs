//! The music service seam.
//!
//! Everything that talks to the playlist service goes through
//! [`MusicService`]. Reads are paginated: callers fetch a first page and
//! then follow `next_*` until it yields `None`.

use crate::model::{Page, Playlist, PlaylistItem};
use anyhow::Result;

pub trait MusicService {
    /// Identifier of the authenticated user.
    fn current_user_id(&self) -> Result<String>;

    /// First page of the current user's playlists.
    fn current_user_playlists(&self) -> Result<Page<Playlist>>;

    /// Page following `page` in the current user's playlists.
    fn next_playlists(&self, page: &Page<Playlist>) -> Result<Option<Page<Playlist>>>;

    /// First page of a playlist's items.
    fn playlist_items(&self, playlist_id: &str) -> Result<Page<PlaylistItem>>;

    /// Page following `page` in the playlist's items.
    fn next_items(
        &self,
        playlist_id: &str,
        page: &Page<PlaylistItem>,
    ) -> Result<Option<Page<PlaylistItem>>>;

    /// Create an empty playlist owned by `user_id`.
    fn create_playlist(&mut self, user_id: &str, name: &str, public: bool) -> Result<Playlist>;

    /// Append tracks to the end of a playlist. At most 100 ids per call.
    fn add_items(&mut self, playlist_id: &str, track_ids: &[String]) -> Result<()>;

    /// Replace a playlist's contents. At most 100 ids per call.
    fn replace_items(&mut self, playlist_id: &str, track_ids: &[String]) -> Result<()>;
}
