//! Ensure command implementation.
//!
//! The `pyensure ensure` command (the default) checks the manifest and
//! installs whatever is missing.

use crate::cli::args::EnsureArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::requirements::ExecContext;
use crate::runner::Orchestrator;
use crate::ui::{NonInteractiveUI, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The ensure command implementation.
pub struct EnsureCommand<'a> {
    settings: Settings,
    args: EnsureArgs,
    ctx: ExecContext<'a>,
}

impl<'a> EnsureCommand<'a> {
    /// Create a new ensure command.
    pub fn new(settings: Settings, args: EnsureArgs, ctx: ExecContext<'a>) -> Self {
        Self {
            settings,
            args,
            ctx,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &EnsureArgs {
        &self.args
    }
}

impl Command for EnsureCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let orchestrator = Orchestrator::new(&self.settings, &self.ctx);

        let result = if self.args.json {
            // Progress output would corrupt the JSON document on stdout.
            let mut silent = NonInteractiveUI::new(OutputMode::Silent);
            let result = orchestrator.ensure_dependencies(&mut silent);
            ui.output(&serde_json::to_string_pretty(&result)?);
            result
        } else {
            orchestrator.ensure_dependencies(ui)
        };

        Ok(CommandResult::from_outcome(result.overall_success()))
    }
}
