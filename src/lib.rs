//! pyensure - make sure a Python interpreter can import a set of packages.
//!
//! pyensure probes each package in a manifest through the target
//! interpreter and installs whatever is missing with `pip`, trying a list of
//! install strategies in order until one succeeds.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, layering, and validation
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Manifest, aliases, presence checks, and installation
//! - [`runner`] - Run orchestration and outcome reporting
//! - [`shell`] - Child process execution with timeouts
//! - [`ui`] - Spinners, headers, and terminal output
//!
//! # Example
//!
//! ```
//! use pyensure::requirements::{AliasTable, Manifest};
//!
//! let manifest = Manifest::builtin();
//! let aliases = AliasTable::builtin();
//! assert!(manifest.contains("PyYAML"));
//! assert_eq!(aliases.resolve("PyYAML"), "yaml");
//! assert_eq!(aliases.resolve("numpy"), "numpy");
//! ```
//!
//! For process-level behavior, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{EnsureError, Result};
