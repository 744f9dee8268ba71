//! # Command-Line Interface Module
//!
//! This module defines the command-line interface for Spotcrates using Clap
//! derive macros.
//!
//! ## Commands
//!
//! - `daily`: Append new daily mix tracks to the daily target playlist
//! - `subscriptions`: Append new tracks from subscribed playlists
//! - `list-playlists` (`list`): Show playlists, optionally filtered and sorted
//! - `copy`: Copy one playlist's tracks onto another
//! - `randomize`: Shuffle a playlist in place
//! - `commands`: Summarize the commands above
//!
//! ## Examples
//!
//! ```bash
//! spotcrates daily
//! spotcrates list -f "size:gt:100,owner:eq:cmayes" -s "size:desc,name"
//! spotcrates copy "Road Trip" "Road Trip Backup" --randomize
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "spotcrates")]
#[command(about = "Spotcrates: playlist curation - daily mix merging, copying, and filtered listings")]
#[command(version)]
pub struct Args {
    /// Config file to read instead of the platform default
    #[arg(short, long, global = true, env = "SPOTCRATES_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Playlist library snapshot to operate on
    ///
    /// Overrides the `library` key of the config file.
    #[arg(short, long, global = true, env = "SPOTCRATES_LIBRARY")]
    pub library: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append new daily mix tracks to the daily target playlist
    ///
    /// Tracks already in the target, or in any playlist whose name starts
    /// with the exclusion prefix, are skipped. The target is created as a
    /// private playlist if it does not exist.
    Daily,

    /// Append new tracks from subscribed playlists to the subscriptions target
    Subscriptions,

    /// List playlists with optional filtering and sorting
    ///
    /// Filters are comma-separated `field:value` or `field:operator:value`
    /// clauses. Sort keys are comma-separated `field` or `field:direction`.
    /// Field and operator names may be abbreviated.
    #[command(visible_alias = "list")]
    ListPlaylists {
        /// Filter expression, e.g. "name:songs,size:geq:100"
        #[arg(short, long)]
        filter: Option<String>,

        /// Sort expression, e.g. "size:desc,name"
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Copy every track of one playlist onto another
    ///
    /// The destination is created as a private playlist when missing.
    Copy {
        /// Name of the playlist to copy from
        #[arg(value_hint = clap::ValueHint::Other)]
        source: String,

        /// Name of the playlist to copy to
        #[arg(value_hint = clap::ValueHint::Other)]
        dest: String,

        /// Shuffle the tracks before copying
        #[arg(short, long)]
        randomize: bool,
    },

    /// Shuffle a playlist's tracks in place
    Randomize {
        /// Name of the playlist to shuffle
        #[arg(value_hint = clap::ValueHint::Other)]
        name: String,
    },

    /// Print a summary of the available commands
    Commands,

    /// Generate shell completions
    ///
    /// Usage: spotcrates completion bash > ~/.local/share/bash-completion/completions/spotcrates
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
