//! Plain-line UI for CI logs and pipes.

use super::{EnsureTheme, OutputMode, RunSummary, SpinnerHandle, UserInterface};

/// UI without colors or redraws.
///
/// Each install attempt prints its "Installing ..." line when it starts and
/// a result line when it ends, so logs read top to bottom. Warnings and
/// failures go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: EnsureTheme,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: EnsureTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_details() {
            println!("{}", msg);
        }
    }

    fn output(&mut self, text: &str) {
        println!("{}", text);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_details() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(LineSpinner {
            mode: self.mode,
            theme: self.theme.clone(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_details() {
            println!("{}", title);
            println!("{}", self.theme.rule());
        }
    }

    fn show_summary(&mut self, summary: &RunSummary) {
        if self.mode.shows_status() {
            for line in summary.lines(&self.theme) {
                println!("{}", line);
            }
        }
    }
}

/// Prints one indented result line when the attempt finishes.
struct LineSpinner {
    mode: OutputMode,
    theme: EnsureTheme,
}

impl SpinnerHandle for LineSpinner {
    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("  {}", self.theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("  {}", self.theme.format_error(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_attempt_lifecycle_prints_nothing() {
        let mut ui = NonInteractiveUI::new(OutputMode::Silent);
        let mut spinner = ui.start_spinner("Installing numpy (strategy 1)...");
        spinner.finish_error("Strategy 1 failed: exit code 1");
        ui.show_summary(&RunSummary {
            total: 1,
            succeeded: 0,
            failed: 1,
            success: false,
        });
    }
}
