//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use pyensure::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Dependency Checker");
//! ui.success("All required packages are already installed!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, EnsureTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational message. Hidden in quiet and silent modes.
    fn message(&mut self, msg: &str);

    /// Print output the user asked for (listings, JSON). Never suppressed.
    fn output(&mut self, text: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the end-of-run tally.
    fn show_summary(&mut self, summary: &RunSummary);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// Counts shown in the final summary block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Packages that were missing at the start of the run.
    pub total: usize,
    /// Packages installed during the run.
    pub succeeded: usize,
    /// Packages every strategy failed for.
    pub failed: usize,
    /// Overall outcome under the active success policy.
    pub success: bool,
}

impl RunSummary {
    /// The summary block, one entry per line, styled with `theme`.
    pub fn lines(&self, theme: &EnsureTheme) -> Vec<String> {
        let failed = format!("✗ Failed:     {}", self.failed);
        vec![
            theme.rule(),
            theme.header.apply_to("Installation Summary:").to_string(),
            format!("   Missing:    {}", self.total),
            format!(
                "   {}",
                theme.success.apply_to(format!("✓ Successful: {}", self.succeeded))
            ),
            if self.failed > 0 {
                format!("   {}", theme.error.apply_to(failed))
            } else {
                format!("   {}", theme.dim.apply_to(failed))
            },
        ]
    }
}
