//! # Integration Tests for Spotcrates
//!
//! End-to-end checks against the library snapshot in `tests/data/`, both
//! through the public API and through the `spotcrates` binary.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const BREATHE: &str = "3DrlHWCoFqHQYGwE8MWsuv";
const SPEAK_TO_ME: &str = "6rqhFgbbKwnb9MLmUQDhG6";
const MONEY: &str = "0vFOzaXqZHahrZp6enQwQb";

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/playlists.json")
}

/// Test helper: a scratch directory holding a copy of the fixture library
/// and a config file pointing at it.
fn create_test_workspace(extra_config: &str) -> Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let library_path = temp_dir.path().join("library.json");
    fs::copy(fixture_path(), &library_path)?;

    let config_path = temp_dir.path().join("spotcrates_config.toml");
    fs::write(
        &config_path,
        format!("library = {:?}\n{extra_config}", library_path.display().to_string()),
    )?;

    Ok((temp_dir, library_path, config_path))
}

fn run(config_path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_spotcrates"))
        .arg("--config-file")
        .arg(config_path)
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to run spotcrates")
}

#[cfg(test)]
mod library_tests {
    use super::*;
    use spotcrates::config::PlaylistConfig;
    use spotcrates::fields::FieldName;
    use spotcrates::library::LocalLibrary;
    use spotcrates::mix::MergeWarning;
    use spotcrates::playlists::Playlists;

    #[test]
    fn test_daily_merge_against_fixture() -> Result<()> {
        let mut library = LocalLibrary::open(&fixture_path())?.with_page_size(2);

        let report = Playlists::new(&mut library, PlaylistConfig::default()).append_daily_mix()?;

        assert_eq!(report.source_count, 2);
        assert_eq!(report.candidate_count, 5);
        assert_eq!(report.added, vec![SPEAK_TO_ME, MONEY]);
        assert_eq!(
            library.track_ids_named("Now"),
            Some(vec![BREATHE.to_string(), SPEAK_TO_ME.to_string(), MONEY.to_string()])
        );
        Ok(())
    }

    #[test]
    fn test_second_daily_merge_adds_nothing() -> Result<()> {
        let mut library = LocalLibrary::open(&fixture_path())?;
        let mut playlists = Playlists::new(&mut library, PlaylistConfig::default());

        playlists.append_daily_mix()?;
        let second = playlists.append_daily_mix()?;

        assert!(second.added.is_empty());
        assert_eq!(second.warnings, vec![MergeWarning::NothingToAdd]);
        Ok(())
    }

    #[test]
    fn test_listing_filter_then_sort() -> Result<()> {
        let mut library = LocalLibrary::open(&fixture_path())?;
        let playlists = Playlists::new(&mut library, PlaylistConfig::default());

        let records = playlists.list_all_playlists(Some("size:desc,name"), Some("o:eq:CMAYES"))?;
        let names: Vec<String> = records
            .iter()
            .map(|record| record.text(FieldName::PlaylistName))
            .collect();

        assert_eq!(names, vec!["Road Trip", "Now", "Overplayed 2022"]);
        Ok(())
    }

    #[test]
    fn test_listing_description_filter() -> Result<()> {
        let mut library = LocalLibrary::open(&fixture_path())?;
        let playlists = Playlists::new(&mut library, PlaylistConfig::default());

        let records = playlists.list_all_playlists(None, Some("d:st:made,size:lt:4"))?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text(FieldName::PlaylistName), "Daily Mix 1");
        Ok(())
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use spotcrates::library::LocalLibrary;

    #[test]
    fn test_cli_help_displays_correctly() {
        let output = Command::new(env!("CARGO_BIN_EXE_spotcrates"))
            .arg("--help")
            .output()
            .expect("Failed to run help command");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("spotcrates"));
        assert!(stdout.contains("daily"));
        assert!(stdout.contains("list-playlists"));
        assert!(stdout.contains("randomize"));
    }

    #[test]
    fn test_completion_generation() {
        let output = Command::new(env!("CARGO_BIN_EXE_spotcrates"))
            .args(["completion", "bash"])
            .output()
            .expect("Failed to run completion command");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("_spotcrates"));
        assert!(stdout.contains("complete"));
    }

    #[test]
    fn test_commands_summary() {
        let output = Command::new(env!("CARGO_BIN_EXE_spotcrates"))
            .arg("commands")
            .output()
            .expect("Failed to run commands command");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("subscriptions"));
        assert!(stdout.contains("copy"));
    }

    #[test]
    fn test_daily_saves_library() -> Result<()> {
        let (_dir, library_path, config_path) = create_test_workspace("")?;

        let output = run(&config_path, &["daily"]);
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        assert!(String::from_utf8_lossy(&output.stdout).contains("added 2 of 5"));

        let library = LocalLibrary::open(&library_path)?;
        assert_eq!(library.track_ids_named("Now").map(|ids| ids.len()), Some(3));
        Ok(())
    }

    #[test]
    fn test_configured_target_is_created() -> Result<()> {
        let (_dir, library_path, config_path) =
            create_test_workspace("[playlists]\ndaily_mix_target = \"Inbox\"\n")?;

        let output = run(&config_path, &["daily"]);
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

        let library = LocalLibrary::open(&library_path)?;
        // Breathe is no longer excluded: "Now" is not the target here.
        assert_eq!(
            library.track_ids_named("Inbox"),
            Some(vec![SPEAK_TO_ME.to_string(), BREATHE.to_string(), MONEY.to_string()])
        );
        Ok(())
    }

    #[test]
    fn test_list_filters_and_sorts() -> Result<()> {
        let (_dir, _library_path, config_path) = create_test_workspace("")?;

        let output = run(&config_path, &["list", "-f", "n:songs", "-s", "size:desc"]);
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("PLAYLIST NAME"));
        assert!(lines[1].starts_with("SONGS 2"));
        Ok(())
    }

    #[test]
    fn test_invalid_filter_fails() -> Result<()> {
        let (_dir, library_path, config_path) = create_test_workspace("")?;
        let before = fs::read_to_string(&library_path)?;

        let output = run(&config_path, &["list", "-f", "size:gt:many"]);
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("invalid filter clause"));
        assert_eq!(fs::read_to_string(&library_path)?, before);
        Ok(())
    }

    #[test]
    fn test_copy_and_randomize() -> Result<()> {
        let (_dir, library_path, config_path) = create_test_workspace("")?;

        let output = run(&config_path, &["copy", "Road Trip", "Road Trip Backup", "-r"]);
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        let output = run(&config_path, &["randomize", "Road Trip"]);
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

        let library = LocalLibrary::open(&library_path)?;
        let mut original = library.track_ids_named("Road Trip").expect("Road Trip exists");
        let mut backup = library.track_ids_named("Road Trip Backup").expect("backup created");
        original.sort();
        backup.sort();
        assert_eq!(original.len(), 4);
        assert_eq!(original, backup);
        Ok(())
    }

    #[test]
    fn test_copy_unknown_source_fails() -> Result<()> {
        let (_dir, _library_path, config_path) = create_test_workspace("")?;

        let output = run(&config_path, &["copy", "No Such List", "Anything"]);
        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("'No Such List' not found"));
        Ok(())
    }
}
