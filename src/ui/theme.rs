//! Colors and symbols for terminal output.

use console::Style;

/// Width of the `═` rule under headers and above summaries.
pub const RULE_WIDTH: usize = 50;

/// Styles used by the terminal UI and the `list` command.
#[derive(Debug, Clone)]
pub struct EnsureTheme {
    /// Installed / present.
    pub success: Style,
    pub warning: Style,
    /// Failed attempts and failed packages.
    pub error: Style,
    /// Secondary details such as probe names and strategy arguments.
    pub dim: Style,
    /// Package and strategy names.
    pub highlight: Style,
    pub header: Style,
    pub border: Style,
}

impl Default for EnsureTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EnsureTheme {
    /// Colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().cyan(),
            header: Style::new().bold(),
            border: Style::new().dim(),
        }
    }

    /// Theme with every style empty.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            border: Style::new(),
        }
    }

    /// Colored unless colors are disabled for this process.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(format!("✓ {}", msg)).to_string()
    }

    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(format!("⚠ {}", msg)).to_string()
    }

    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(format!("✗ {}", msg)).to_string()
    }

    /// Title line for the run banner.
    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(format!("🐍 {}", title)).to_string()
    }

    /// Horizontal rule.
    pub fn rule(&self) -> String {
        self.border.apply_to("═".repeat(RULE_WIDTH)).to_string()
    }

    /// A manifest entry, with its import name when that differs.
    pub fn format_package(&self, name: &str, probe: &str) -> String {
        if name == probe {
            self.highlight.apply_to(name).to_string()
        } else {
            format!(
                "{} {}",
                self.highlight.apply_to(name),
                self.dim.apply_to(format!("(imports as {})", probe))
            )
        }
    }
}

/// Whether stdout should get ANSI colors.
///
/// `NO_COLOR` (https://no-color.org/) disables them; so does a non-TTY.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}
