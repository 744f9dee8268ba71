//! # Configuration Module
//!
//! This module handles configuration loading and data directory setup for
//! Spotcrates. Configuration is a TOML file; every setting has a hardcoded
//! default, and the effective settings are built once per invocation by
//! merging the file's overrides over those defaults.
//!
//! ## File Locations
//!
//! - Config: `<config dir>/spotcrates/spotcrates_config.toml`
//! - Library snapshot: `<data dir>/spotcrates/library.json`
//!
//! where the platform directories come from `dirs`:
//! - Linux: `~/.config/`, `~/.local/share/`
//! - macOS: `~/Library/Application Support/`
//! - Windows: `%APPDATA%\`
//!
//! ## Example
//!
//! ```toml
//! library = "/home/me/music/library.json"
//!
//! [playlists]
//! daily_mix_target = "Inbox"
//! daily_mix_exclude_prefix = "Heard"
//! ```

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "spotcrates";
const CONFIG_FILE: &str = "spotcrates_config.toml";
const LIBRARY_FILE: &str = "library.json";

/// Returns the platform-appropriate config file path.
///
/// The directory is not created; a missing config file just means defaults.
///
/// # Errors
///
/// Fails if the system config directory cannot be determined.
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system config directory. Pass --config-file explicitly."
        )
    })?;

    Ok(config_dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Returns the platform-appropriate data directory for Spotcrates, creating
/// it if needed.
///
/// # Errors
///
/// Fails if the system data directory cannot be determined or created.
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system data directory. Please ensure your platform supports standard data directories."
        )
    })?;

    let app_dir = data_dir.join(APP_DIR);
    fs::create_dir_all(&app_dir).with_context(|| {
        format!(
            "Failed to create Spotcrates data directory at {}. Please check file permissions.",
            app_dir.display()
        )
    })?;

    Ok(app_dir)
}

/// Default location of the library snapshot.
pub fn get_library_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(LIBRARY_FILE))
}

/// Effective playlist-automation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistConfig {
    /// Name prefix of the daily mix source playlists.
    pub daily_mix_prefix: String,
    /// Exact name of the playlist daily mixes are appended to.
    pub daily_mix_target: String,
    /// Name prefix of playlists whose tracks are never re-added.
    pub daily_mix_exclude_prefix: String,
    /// Name prefix of subscribed source playlists.
    pub subscriptions_prefix: String,
    /// Exact name of the playlist subscriptions are appended to.
    pub subscriptions_target: String,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            daily_mix_prefix: "Daily Mix".to_string(),
            daily_mix_target: "Now".to_string(),
            daily_mix_exclude_prefix: "Overplayed".to_string(),
            subscriptions_prefix: "Subscribed".to_string(),
            subscriptions_target: "New Subscriptions".to_string(),
        }
    }
}

/// Settings as they appear in the config file; absent keys keep defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaylistOverrides {
    pub daily_mix_prefix: Option<String>,
    pub daily_mix_target: Option<String>,
    pub daily_mix_exclude_prefix: Option<String>,
    pub subscriptions_prefix: Option<String>,
    pub subscriptions_target: Option<String>,
}

impl PlaylistConfig {
    /// Overlay `overrides` on `defaults`.
    #[must_use]
    pub fn merge(defaults: PlaylistConfig, overrides: PlaylistOverrides) -> PlaylistConfig {
        PlaylistConfig {
            daily_mix_prefix: overrides.daily_mix_prefix.unwrap_or(defaults.daily_mix_prefix),
            daily_mix_target: overrides.daily_mix_target.unwrap_or(defaults.daily_mix_target),
            daily_mix_exclude_prefix: overrides
                .daily_mix_exclude_prefix
                .unwrap_or(defaults.daily_mix_exclude_prefix),
            subscriptions_prefix: overrides
                .subscriptions_prefix
                .unwrap_or(defaults.subscriptions_prefix),
            subscriptions_target: overrides
                .subscriptions_target
                .unwrap_or(defaults.subscriptions_target),
        }
    }
}

/// Raw config file contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    library: Option<PathBuf>,
    playlists: PlaylistOverrides,
}

/// Configuration for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Library snapshot location, if the file names one.
    pub library: Option<PathBuf>,
    pub playlists: PlaylistConfig,
}

impl RuntimeConfig {
    /// Parse TOML text and merge it over the defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text).context("Invalid TOML configuration")?;
        Ok(Self {
            library: file.library,
            playlists: PlaylistConfig::merge(PlaylistConfig::default(), file.playlists),
        })
    }

    /// Load the config file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file '{}' does not exist; using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In config file {}", path.display()))
    }

    /// Library path: explicit argument, then config file, then the data dir.
    pub fn library_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        match (explicit, &self.library) {
            (Some(path), _) => Ok(path.to_path_buf()),
            (None, Some(path)) => Ok(path.clone()),
            (None, None) => get_library_path(),
        }
    }
}
