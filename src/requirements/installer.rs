//! Package installation with fallback strategies.
//!
//! The installer tries each [`InstallStrategy`] in order and stops at the
//! first one whose process exits 0. A non-zero exit, a timeout, or a launch
//! failure only moves on to the next strategy; the package fails once the
//! list is exhausted.

use serde::Serialize;
use std::time::Duration;

use super::context::ExecContext;
use super::strategy::InstallStrategy;
use crate::error::EnsureError;
use crate::ui::UserInterface;

/// Marker pip uses to start advisory text after the real error.
const STDERR_NOTE_MARKER: &str = "note:";

/// How a single strategy attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// The process exited 0.
    Succeeded,
    /// The process exited non-zero.
    Exited { code: Option<i32>, reason: String },
    /// The process ran past the timeout and was killed.
    TimedOut { secs: u64 },
    /// The process could not be started.
    LaunchFailed { message: String },
}

impl AttemptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Record of one strategy attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptRecord {
    /// 1-based position in the strategy list.
    pub index: usize,
    /// Strategy name.
    pub strategy: String,
    #[serde(flatten)]
    pub outcome: AttemptOutcome,
}

/// Everything that happened while installing one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    pub package: String,
    pub attempts: Vec<AttemptRecord>,
}

impl InstallReport {
    /// Whether some strategy installed the package.
    pub fn succeeded(&self) -> bool {
        self.attempts.last().is_some_and(|a| a.outcome.is_success())
    }
}

/// Installs packages by walking the strategy list.
pub struct Installer<'a> {
    python: &'a str,
    strategies: &'a [InstallStrategy],
    timeout: Duration,
    ctx: &'a ExecContext<'a>,
}

impl<'a> Installer<'a> {
    /// Create an installer running strategies through `python`.
    pub fn new(
        python: &'a str,
        strategies: &'a [InstallStrategy],
        timeout: Duration,
        ctx: &'a ExecContext<'a>,
    ) -> Self {
        Self {
            python,
            strategies,
            timeout,
            ctx,
        }
    }

    /// Install `package`, reporting each attempt to `ui`.
    pub fn install(&self, package: &str, ui: &mut dyn UserInterface) -> InstallReport {
        let mut attempts = Vec::new();

        for (i, strategy) in self.strategies.iter().enumerate() {
            let index = i + 1;
            let invocation = strategy.build(self.python, package, self.timeout);
            tracing::debug!("{} strategy {} ({}): {}", package, index, strategy.name, invocation.display());

            let mut spinner =
                ui.start_spinner(&format!("Installing {} (strategy {})...", package, index));

            let outcome = match (self.ctx.run_command)(&invocation) {
                Ok(result) if result.success => {
                    if ui.output_mode().shows_command_output() && !result.stdout.trim().is_empty() {
                        ui.message(result.stdout.trim_end());
                    }
                    AttemptOutcome::Succeeded
                }
                Ok(result) => AttemptOutcome::Exited {
                    code: result.exit_code,
                    reason: failure_reason(&result.stderr, result.exit_code),
                },
                Err(EnsureError::CommandTimedOut { secs, .. }) => AttemptOutcome::TimedOut { secs },
                Err(e) => AttemptOutcome::LaunchFailed {
                    message: e.to_string(),
                },
            };

            match &outcome {
                AttemptOutcome::Succeeded => {
                    spinner.finish_success(&format!("{} installed successfully", package));
                }
                AttemptOutcome::Exited { reason, .. } => {
                    spinner.finish_error(&format!("Strategy {} failed: {}", index, reason));
                }
                AttemptOutcome::TimedOut { secs } => {
                    spinner.finish_error(&format!("Strategy {} timed out after {}s", index, secs));
                }
                AttemptOutcome::LaunchFailed { message } => {
                    spinner.finish_error(&format!("Strategy {} error: {}", index, message));
                }
            }

            let done = outcome.is_success();
            if !done {
                tracing::warn!("{} strategy {} ({}) failed: {:?}", package, index, strategy.name, outcome);
            }
            attempts.push(AttemptRecord {
                index,
                strategy: strategy.name.clone(),
                outcome,
            });
            if done {
                return InstallReport {
                    package: package.to_string(),
                    attempts,
                };
            }
        }

        ui.error(&format!("All installation strategies failed for {}", package));
        InstallReport {
            package: package.to_string(),
            attempts,
        }
    }
}

/// Condense pip's stderr into a one-line reason.
///
/// Keeps the text before the first `note:` marker; falls back to the exit
/// code when nothing useful is left.
pub fn failure_reason(stderr: &str, code: Option<i32>) -> String {
    let head = stderr
        .split(STDERR_NOTE_MARKER)
        .next()
        .unwrap_or_default()
        .trim();
    if head.is_empty() {
        match code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    } else {
        head.to_string()
    }
}
