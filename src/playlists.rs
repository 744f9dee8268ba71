//! # Playlist Commands
//!
//! [`Playlists`] drives every playlist-level command against a
//! [`MusicService`]: listing with filter/sort expressions, merging daily
//! mixes or subscriptions into a target playlist, copying, and shuffling.
//!
//! All reads for a command complete before its first write. Merge commands
//! report "nothing to do" as [`MergeWarning`]s rather than errors; any
//! failed fetch or write aborts the command.

use crate::config::PlaylistConfig;
use crate::error::PlaylistError;
use crate::fields::FieldName;
use crate::filters::{apply_filters, parse_filters};
use crate::mix::{compute_append_batch, MergeWarning, APPEND_BATCH_SIZE};
use crate::model::{Playlist, TrackRef};
use crate::paging::{batched, get_all_items};
use crate::record::PlaylistRecord;
use crate::service::MusicService;
use crate::sorting::{apply_sort, parse_sort_fields};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Outcome of a merge command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Target playlist id, created if it was missing.
    pub target_id: String,
    /// Number of source playlists found.
    pub source_count: usize,
    /// Track references read from the sources, before exclusion.
    pub candidate_count: usize,
    /// Track ids appended to the target, in order.
    pub added: Vec<String>,
    pub warnings: Vec<MergeWarning>,
}

/// Playlists grouped for a merge.
#[derive(Debug, Default)]
struct Classified {
    sources: Vec<Playlist>,
    target: Option<Playlist>,
    exclusions: Vec<Playlist>,
}

fn classify(
    playlists: Vec<Playlist>,
    source_prefix: &str,
    target_name: &str,
    exclude_prefix: &str,
) -> Classified {
    let mut classified = Classified::default();
    for playlist in playlists {
        let Some(name) = playlist.name.as_deref() else {
            continue;
        };
        if name == target_name {
            if classified.target.is_none() {
                classified.target = Some(playlist);
            }
        } else if name.starts_with(source_prefix) {
            classified.sources.push(playlist);
        } else if name.starts_with(exclude_prefix) {
            classified.exclusions.push(playlist);
        }
    }
    classified
}

pub struct Playlists<'a, S: MusicService> {
    service: &'a mut S,
    config: PlaylistConfig,
}

impl<'a, S: MusicService> Playlists<'a, S> {
    pub fn new(service: &'a mut S, config: PlaylistConfig) -> Self {
        Self { service, config }
    }

    #[must_use]
    pub fn config(&self) -> &PlaylistConfig {
        &self.config
    }

    /// Every playlist of the current user, across all pages.
    pub fn get_all_playlists(&self) -> Result<Vec<Playlist>> {
        let first = self
            .service
            .current_user_playlists()
            .context("Failed to fetch playlists")?;
        get_all_items(first, |page| self.service.next_playlists(page))
            .context("Failed to fetch playlists")
    }

    /// Playlist records, filtered then sorted.
    ///
    /// Both expressions are parsed before anything is fetched, so an invalid
    /// expression fails without touching the service. The underlying
    /// [`crate::error::QueryError`] is kept as the error's source.
    pub fn list_all_playlists(
        &self,
        sort_fields: Option<&str>,
        filters: Option<&str>,
    ) -> Result<Vec<PlaylistRecord>> {
        let filters = parse_filters(filters)?;
        let sort_fields = parse_sort_fields(sort_fields)?;

        let records: Vec<PlaylistRecord> = self
            .get_all_playlists()?
            .iter()
            .map(PlaylistRecord::from)
            .collect();

        let records = if filters.is_empty() {
            records
        } else {
            apply_filters(records, &filters)
        };
        Ok(apply_sort(records, &sort_fields))
    }

    /// Append new tracks from the daily mixes to the daily target playlist.
    pub fn append_daily_mix(&mut self) -> Result<MergeReport> {
        let source_prefix = self.config.daily_mix_prefix.clone();
        let target_name = self.config.daily_mix_target.clone();
        let exclude_prefix = self.config.daily_mix_exclude_prefix.clone();
        self.merge_into(&source_prefix, &target_name, &exclude_prefix)
    }

    /// Append new tracks from subscribed playlists to the subscriptions target.
    pub fn append_subscriptions(&mut self) -> Result<MergeReport> {
        let source_prefix = self.config.subscriptions_prefix.clone();
        let target_name = self.config.subscriptions_target.clone();
        let exclude_prefix = self.config.daily_mix_exclude_prefix.clone();
        self.merge_into(&source_prefix, &target_name, &exclude_prefix)
    }

    fn merge_into(
        &mut self,
        source_prefix: &str,
        target_name: &str,
        exclude_prefix: &str,
    ) -> Result<MergeReport> {
        let classified = classify(
            self.get_all_playlists()?,
            source_prefix,
            target_name,
            exclude_prefix,
        );
        let mut report = MergeReport {
            source_count: classified.sources.len(),
            ..MergeReport::default()
        };

        let target = match classified.target {
            Some(target) => target,
            None => {
                info!("Target playlist '{target_name}' not found; creating it");
                let user_id = self.service.current_user_id()?;
                self.service
                    .create_playlist(&user_id, target_name, false)
                    .with_context(|| format!("Failed to create playlist '{target_name}'"))?
            }
        };
        report.target_id = target.id.clone();

        if classified.sources.is_empty() {
            warn!("No source playlists found with the prefix '{source_prefix}'");
            report.warnings.push(MergeWarning::NoSources {
                prefix: source_prefix.to_string(),
            });
            return Ok(report);
        }

        let target_tracks = self.get_playlist_tracks(&target.id)?;
        let exclusion_tracks = classified
            .exclusions
            .iter()
            .map(|playlist| self.get_playlist_tracks(&playlist.id))
            .collect::<Result<Vec<_>>>()?;
        let source_tracks = classified
            .sources
            .iter()
            .map(|playlist| self.get_playlist_tracks(&playlist.id))
            .collect::<Result<Vec<_>>>()?;

        report.candidate_count = source_tracks.iter().map(Vec::len).sum();
        let batch = compute_append_batch(&source_tracks, &target_tracks, &exclusion_tracks);

        info!(
            "{} to add from an original count of {}",
            batch.len(),
            report.candidate_count
        );

        if batch.is_empty() {
            warn!("No new tracks to add to '{target_name}'");
            report.warnings.push(MergeWarning::NothingToAdd);
            return Ok(report);
        }

        self.add_tracks(&target.id, &batch)?;
        report.added = batch;
        Ok(report)
    }

    /// Copy every track of `source_name` onto `dest_name`, creating the
    /// destination when missing. Returns the number of tracks copied.
    pub fn copy_list(&mut self, source_name: &str, dest_name: &str, randomize: bool) -> Result<usize> {
        let playlists = self.get_all_playlists()?;
        let source = find_named(&playlists, source_name)
            .ok_or_else(|| PlaylistError::NotFound(source_name.to_string()))?;

        let mut track_ids: Vec<String> = self
            .get_playlist_tracks(&source.id)?
            .into_iter()
            .map(|track| track.id)
            .collect();
        if randomize {
            track_ids.shuffle(&mut thread_rng());
        }

        let dest_id = match find_named(&playlists, dest_name) {
            Some(dest) => dest.id.clone(),
            None => {
                info!("Destination playlist '{dest_name}' not found; creating it");
                let user_id = self.service.current_user_id()?;
                self.service
                    .create_playlist(&user_id, dest_name, false)
                    .with_context(|| format!("Failed to create playlist '{dest_name}'"))?
                    .id
            }
        };

        self.add_tracks(&dest_id, &track_ids)?;
        info!("Copied {} tracks from '{source_name}' to '{dest_name}'", track_ids.len());
        Ok(track_ids.len())
    }

    /// Rewrite `name` with its tracks in random order. Returns the track count.
    pub fn randomize_list(&mut self, name: &str) -> Result<usize> {
        let playlists = self.get_all_playlists()?;
        let playlist = find_named(&playlists, name)
            .ok_or_else(|| PlaylistError::NotFound(name.to_string()))?;

        let mut track_ids: Vec<String> = self
            .get_playlist_tracks(&playlist.id)?
            .into_iter()
            .map(|track| track.id)
            .collect();
        if track_ids.is_empty() {
            warn!("Playlist '{name}' has no tracks to shuffle");
            return Ok(0);
        }
        track_ids.shuffle(&mut thread_rng());

        let mut batches = batched(&track_ids, APPEND_BATCH_SIZE).into_iter();
        if let Some(first) = batches.next() {
            self.service
                .replace_items(&playlist.id, &first)
                .with_context(|| format!("Failed to replace tracks of '{name}'"))?;
        }
        for batch in batches {
            self.service
                .add_items(&playlist.id, &batch)
                .with_context(|| format!("Failed to add tracks to '{name}'"))?;
        }

        info!("Shuffled {} tracks in '{name}'", track_ids.len());
        Ok(track_ids.len())
    }

    fn get_playlist_tracks(&self, playlist_id: &str) -> Result<Vec<TrackRef>> {
        let first = self
            .service
            .playlist_items(playlist_id)
            .with_context(|| format!("Failed to fetch tracks of playlist {playlist_id}"))?;
        let items = get_all_items(first, |page| self.service.next_items(playlist_id, page))
            .with_context(|| format!("Failed to fetch tracks of playlist {playlist_id}"))?;
        Ok(items.into_iter().filter_map(TrackRef::from_item).collect())
    }

    fn add_tracks(&mut self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        for batch in batched(track_ids, APPEND_BATCH_SIZE) {
            debug!("Batch size: {}", batch.len());
            self.service
                .add_items(playlist_id, &batch)
                .with_context(|| format!("Failed to add tracks to playlist {playlist_id}"))?;
        }
        Ok(())
    }
}

fn find_named<'p>(playlists: &'p [Playlist], name: &str) -> Option<&'p Playlist> {
    playlists
        .iter()
        .find(|playlist| playlist.name.as_deref() == Some(name))
}

/// Fixed-width listing table, one playlist per line after a header.
#[must_use]
pub fn format_listing(records: &[PlaylistRecord]) -> String {
    let mut out = format!(
        "{:<40} {:>6} {:<20} {}\n",
        "PLAYLIST NAME", "SIZE", "OWNER", "DESCRIPTION"
    );
    for record in records {
        out.push_str(&format!(
            "{:<40} {:>6} {:<20} {}\n",
            truncate(&record.text(FieldName::PlaylistName), 40),
            record.text(FieldName::Size),
            truncate(&record.text(FieldName::Owner), 20),
            record.text(FieldName::PlaylistDescription),
        ));
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
