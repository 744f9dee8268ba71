//! # Spotcrates - Playlist Curation
//!
//! Spotcrates keeps a set of "crate" playlists topped up from auto-generated
//! ones: new daily mix tracks land in one target playlist, tracks you have
//! heard too often stay out, and listings can be filtered and sorted with
//! short expressions.
//!
//! ## Usage
//!
//! ```bash
//! # Merge today's daily mixes into "Now"
//! spotcrates daily
//!
//! # Large playlists you own, biggest first
//! spotcrates list -f "size:geq:100,owner:eq:cmayes" -s "size:desc"
//!
//! # Shuffle a playlist in place
//! spotcrates randomize "Road Trip"
//! ```
//!
//! Logging is controlled via `RUST_LOG` and defaults to `info`:
//! - `RUST_LOG=debug spotcrates daily` - Show paging and batching detail
//! - `RUST_LOG=spotcrates::filters=debug spotcrates list -f n:mix` - Module-specific logging

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::{debug, info};
use spotcrates::cli::{Args, Command};
use spotcrates::completion;
use spotcrates::config::{self, RuntimeConfig};
use spotcrates::library::LocalLibrary;
use spotcrates::playlists::{format_listing, MergeReport, Playlists};

const COMMAND_DESCRIPTIONS: &[(&str, &str)] = &[
    ("daily", "Append new daily mix tracks to the daily target playlist"),
    ("subscriptions", "Append new subscribed-playlist tracks to the subscriptions target"),
    ("list-playlists", "List playlists; -f filters, -s sorts (alias: list)"),
    ("copy", "Copy a playlist's tracks onto another; -r shuffles first"),
    ("randomize", "Shuffle a playlist's tracks in place"),
    ("commands", "Print this summary"),
    ("completion", "Generate a shell completion script"),
];

fn print_commands() {
    let width = COMMAND_DESCRIPTIONS
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);
    for (name, description) in COMMAND_DESCRIPTIONS {
        println!("{name:<width$}  {description}");
    }
}

fn print_report(label: &str, report: &MergeReport) {
    for warning in &report.warnings {
        println!("{label}: {warning}");
    }
    println!(
        "{label}: added {} of {} tracks from {} playlist(s)",
        report.added.len(),
        report.candidate_count,
        report.source_count
    );
}

fn open_library(args: &Args, runtime: &RuntimeConfig) -> Result<LocalLibrary> {
    let path = runtime.library_path(args.library.as_deref())?;
    debug!("Using playlist library {}", path.display());
    LocalLibrary::open(&path)
}

/// Main entry point for Spotcrates.
///
/// Initializes logging, parses arguments, loads configuration, and routes
/// the command. Commands that change playlists save the library afterwards.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match &args.command {
        Command::Completion { shell } => {
            let mut cmd = Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(shell), &mut cmd);
            return Ok(());
        }
        Command::Commands => {
            print_commands();
            return Ok(());
        }
        _ => {}
    }

    let config_path = match &args.config_file {
        Some(path) => path.clone(),
        None => config::get_config_path()?,
    };
    let runtime = RuntimeConfig::load(&config_path)?;
    let mut library = open_library(&args, &runtime)?;

    let mut playlists = Playlists::new(&mut library, runtime.playlists);
    match &args.command {
        Command::Daily => {
            let report = playlists.append_daily_mix()?;
            print_report("daily", &report);
        }
        Command::Subscriptions => {
            let report = playlists.append_subscriptions()?;
            print_report("subscriptions", &report);
        }
        Command::ListPlaylists { filter, sort } => {
            let records = playlists.list_all_playlists(sort.as_deref(), filter.as_deref())?;
            print!("{}", format_listing(&records));
        }
        Command::Copy { source, dest, randomize } => {
            let copied = playlists.copy_list(source, dest, *randomize)?;
            println!("Copied {copied} tracks from '{source}' to '{dest}'");
        }
        Command::Randomize { name } => {
            let count = playlists.randomize_list(name)?;
            println!("Shuffled {count} tracks in '{name}'");
        }
        Command::Commands | Command::Completion { .. } => {}
    }

    if library.writes().is_empty() {
        info!("No changes to save");
    } else {
        library.save()?;
    }

    Ok(())
}
