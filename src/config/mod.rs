//! Configuration loading and resolution.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering and validation in [`settings`]
//!
//! # Example
//!
//! ```
//! use pyensure::config::{load_config, CliOverrides, Settings};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".pyensure");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "packages: [numpy]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let settings = Settings::resolve(&config, &CliOverrides::default()).unwrap();
//! assert_eq!(settings.manifest.len(), 1);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. `--config <path>` (must exist)
//! 2. Project config (`.pyensure/config.yml`)

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{load_config, load_config_file, parse_config, ConfigPaths};
pub use schema::EnsureConfig;
pub use settings::{
    CliOverrides, Settings, DEFAULT_INSTALL_TIMEOUT_SECS, DEFAULT_PROBE_TIMEOUT_SECS,
};
