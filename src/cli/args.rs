//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::CliOverrides;

/// pyensure - make sure a Python interpreter has the packages you need.
#[derive(Debug, Parser)]
#[command(name = "pyensure")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .pyensure/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Python interpreter to probe and install with
    #[arg(long, global = true, env = "PYENSURE_PYTHON", value_name = "PATH")]
    pub python: Option<String>,

    /// Seconds each install attempt may run
    #[arg(long, global = true, env = "PYENSURE_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Fail unless every missing package gets installed
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Flags that override config file values.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            python: self.python.clone(),
            timeout_secs: self.timeout,
            strict: self.strict,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check and install missing packages (default if no command specified)
    Ensure(EnsureArgs),

    /// Report missing packages without installing
    Check(CheckArgs),

    /// List the package manifest and probe names
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ensure` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnsureArgs {
    /// Print the run result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Print the check result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Print the manifest as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
