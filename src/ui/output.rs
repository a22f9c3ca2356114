//! Output verbosity.

/// How much a run prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, including pip's own stdout and per-package probe lines.
    Verbose,
    /// Header, missing list, per-attempt spinners, and the summary.
    #[default]
    Normal,
    /// Spinners, warnings, errors, and the summary. No header or info lines.
    Quiet,
    /// Errors only. Used underneath `--json`.
    Silent,
}

impl OutputMode {
    /// Pick a mode from the `--verbose` / `--quiet` flags. Quiet wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Whether pip output and probe details are echoed.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Whether install attempts get a spinner line.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Whether warnings, attempt results, and the summary are printed.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Whether the header and informational lines are printed.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
