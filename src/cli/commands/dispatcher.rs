//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, EnsureArgs};
use crate::config::{load_config, Settings};
use crate::error::Result;
use crate::requirements::default_context;
use crate::ui::UserInterface;

/// Exit code for configuration errors.
pub const CONFIG_ERROR_EXIT_CODE: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Exit 0 when `ok`, 1 otherwise.
    pub fn from_outcome(ok: bool) -> Self {
        if ok {
            Self::success()
        } else {
            Self::failure(1)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load the config file and layer the command-line flags over it.
    pub fn resolve_settings(&self, cli: &Cli) -> Result<Settings> {
        let config = load_config(&self.project_root, cli.config.as_deref())?;
        Settings::resolve(&config, &cli.overrides())
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Configuration errors are reported here and exit
    /// with [`CONFIG_ERROR_EXIT_CODE`].
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Completions never depend on the config file.
        if let Some(Commands::Completions(args)) = &cli.command {
            let cmd = super::completions::CompletionsCommand::new(args.clone());
            return cmd.execute(ui);
        }

        let settings = match self.resolve_settings(cli) {
            Ok(settings) => settings,
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(CONFIG_ERROR_EXIT_CODE));
            }
            Err(e) => return Err(e),
        };
        tracing::debug!("Resolved settings: {:?}", settings);

        let ctx = default_context();
        match &cli.command {
            Some(Commands::Ensure(args)) => {
                let cmd = super::ensure::EnsureCommand::new(settings, args.clone(), ctx);
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(settings, args.clone(), ctx);
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(settings, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to ensure with default args
                let cmd = super::ensure::EnsureCommand::new(settings, EnsureArgs::default(), ctx);
                cmd.execute(ui)
            }
        }
    }
}
