//! Mockable process execution for the checker and installer.

use crate::error::Result;
use crate::shell::{self, CommandResult, Invocation};

/// Dependencies the checker and installer reach the outside world through.
pub struct ExecContext<'a> {
    /// Run a child process and collect its output.
    pub run_command: &'a dyn Fn(&Invocation) -> Result<CommandResult>,
}

/// Build the `ExecContext` used in production.
pub fn default_context() -> ExecContext<'static> {
    ExecContext {
        run_command: &shell::execute,
    }
}
