//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which resolves
//! settings once and routes CLI subcommands to their implementations.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod ensure;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, CONFIG_ERROR_EXIT_CODE};
