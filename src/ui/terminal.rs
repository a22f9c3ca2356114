//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    EnsureTheme, NonInteractiveUI, OutputMode, ProgressSpinner, RunSummary, SpinnerHandle,
    UserInterface,
};

/// UI for a human at a TTY: colors, animated spinners, and a boxed summary.
pub struct TerminalUI {
    term: Term,
    theme: EnsureTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: EnsureTheme::detect(),
            mode,
        }
    }

    fn line(&mut self, text: &str) {
        // A closed stdout is not worth failing an install run over.
        writeln!(self.term, "{}", text).ok();
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_details() {
            self.line(msg);
        }
    }

    fn output(&mut self, text: &str) {
        self.line(text);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_details() {
            let text = self.theme.format_success(msg);
            self.line(&text);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let text = self.theme.format_warning(msg);
            self.line(&text);
        }
    }

    fn error(&mut self, msg: &str) {
        let text = self.theme.format_error(msg);
        self.line(&text);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_details() {
            let header = self.theme.format_header(title);
            let rule = self.theme.rule();
            self.line("");
            self.line(&header);
            self.line(&rule);
        }
    }

    fn show_summary(&mut self, summary: &RunSummary) {
        if self.mode.shows_status() {
            for line in summary.lines(&self.theme) {
                self.line(&line);
            }
        }
    }
}

/// Pick the UI for this process.
///
/// The terminal UI needs both an interactive session and a TTY on stdout;
/// anything else gets plain lines.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
