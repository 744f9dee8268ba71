//! Playlist curation for a streaming music account.
//!
//! Core modules:
//! - [`playlists`] - Listing, daily mix merging, copying, shuffling
//! - [`filters`] / [`sorting`] - Filter and sort expressions for listings
//! - [`mix`] - Which tracks a merge appends
//! - [`service`] - The playlist service seam; [`library`] implements it
//!
//! ### Supporting Modules
//!
//! - [`lookup`] - Longest-prefix abbreviation tables
//! - [`fields`] / [`operators`] - Field, direction, and operator vocabularies
//! - [`record`] / [`model`] - Listing records and service data
//! - [`paging`] - Draining paginated listings, chunking writes
//! - [`config`] - TOML configuration and data directory management
//! - [`error`] - Typed query and playlist errors
//! - [`cli`] / [`completion`] - Command-line definitions and shell completion
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use spotcrates::config::PlaylistConfig;
//! use spotcrates::library::LocalLibrary;
//! use spotcrates::playlists::Playlists;
//! use std::path::Path;
//!
//! let mut library = LocalLibrary::open(Path::new("library.json"))?;
//! let mut playlists = Playlists::new(&mut library, PlaylistConfig::default());
//!
//! for record in playlists.list_all_playlists(Some("size:desc"), Some("owner:eq:cmayes"))? {
//!     println!("{}", record.text(spotcrates::fields::FieldName::PlaylistName));
//! }
//!
//! let report = playlists.append_daily_mix()?;
//! println!("Added {} tracks", report.added.len());
//! library.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Expressions
//!
//! Filters are comma-separated `field:value` (contains) or
//! `field:operator:value` clauses; all clauses must hold. Sorts are
//! comma-separated `field` or `field:direction` keys, most significant
//! first. Every field, operator, and direction name can be abbreviated to
//! any prefix of a registered abbreviation:
//!
//! | Field         | Names                               | Type    |
//! |---------------|-------------------------------------|---------|
//! | playlist name | `name`, `playlistname`              | text    |
//! | size          | `size`, `count`, `tracks`           | numeric |
//! | owner         | `owner`                             | text    |
//! | description   | `description`                       | text    |
//!
//! Operators: `contains`, `equals`, `starts`, `ends`, `greater`, `geq`,
//! `less`, `leq`. Text comparisons ignore case.

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod fields;
pub mod filters;
pub mod library;
pub mod lookup;
pub mod mix;
pub mod model;
pub mod operators;
pub mod paging;
pub mod playlists;
pub mod record;
pub mod service;
pub mod sorting;
