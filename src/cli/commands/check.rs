//! Check command implementation.
//!
//! The `pyensure check` command reports missing packages without
//! installing anything. Exits 1 when something is missing.

use crate::cli::args::CheckArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::requirements::ExecContext;
use crate::runner::Orchestrator;
use crate::ui::{NonInteractiveUI, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    settings: Settings,
    args: CheckArgs,
    ctx: ExecContext<'a>,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(settings: Settings, args: CheckArgs, ctx: ExecContext<'a>) -> Self {
        Self {
            settings,
            args,
            ctx,
        }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let orchestrator = Orchestrator::new(&self.settings, &self.ctx);

        let report = if self.args.json {
            let mut silent = NonInteractiveUI::new(OutputMode::Silent);
            let report = orchestrator.check_only(&mut silent);
            ui.output(&serde_json::to_string_pretty(&report)?);
            report
        } else {
            orchestrator.check_only(ui)
        };

        Ok(CommandResult::from_outcome(report.all_present()))
    }
}
