//! Run orchestration.
//!
//! The [`Orchestrator`] owns one pass of the pipeline: probe every manifest
//! entry, install what is missing in manifest order, and tally the result.
//! Everything is sequential; each child process is waited on before the
//! next one starts.

use crate::config::Settings;
use crate::requirements::{ExecContext, InstallReport, Installer, PresenceChecker};
use crate::ui::UserInterface;

use super::result::{CheckReport, RunResult};

/// Banner shown at the start of every run.
pub const HEADER_TITLE: &str = "Python Dependency Checker";

/// Runs the check → install → summarize pipeline.
pub struct Orchestrator<'a> {
    settings: &'a Settings,
    ctx: &'a ExecContext<'a>,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator over resolved settings.
    pub fn new(settings: &'a Settings, ctx: &'a ExecContext<'a>) -> Self {
        Self { settings, ctx }
    }

    fn checker(&self) -> PresenceChecker<'_> {
        PresenceChecker::new(
            &self.settings.python,
            &self.settings.aliases,
            self.settings.probe_timeout,
            self.ctx,
        )
    }

    fn installer(&self) -> Installer<'_> {
        Installer::new(
            &self.settings.python,
            &self.settings.strategies,
            self.settings.install_timeout,
            self.ctx,
        )
    }

    /// Probe every manifest entry and partition into present / missing.
    pub fn check(&self, ui: &mut dyn UserInterface) -> CheckReport {
        let checker = self.checker();
        let verbose = ui.output_mode().shows_command_output();
        let mut report = CheckReport::default();

        for package in self.settings.manifest.iter() {
            if checker.is_present(package) {
                if verbose {
                    ui.message(&format!("  {} ({}) present", package, checker.probe_name(package)));
                }
                report.present.push(package.to_string());
            } else {
                if verbose {
                    ui.message(&format!("  {} ({}) missing", package, checker.probe_name(package)));
                }
                report.missing.push(package.to_string());
            }
        }

        tracing::info!(
            "{} of {} packages missing",
            report.missing.len(),
            report.checked()
        );
        report
    }

    /// Report which packages are missing without installing anything.
    pub fn check_only(&self, ui: &mut dyn UserInterface) -> CheckReport {
        ui.show_header(HEADER_TITLE);
        let report = self.check(ui);

        if report.all_present() {
            ui.success("All required packages are already installed!");
        } else {
            ui.message(&format!("Missing packages: {}", report.missing.join(", ")));
            ui.warning(&format!(
                "{} of {} packages are missing",
                report.missing.len(),
                report.checked()
            ));
        }
        report
    }

    /// Make sure every manifest package is importable.
    ///
    /// Missing packages are installed one at a time; a package whose
    /// strategies all fail is counted and the run moves on.
    pub fn ensure_dependencies(&self, ui: &mut dyn UserInterface) -> RunResult {
        ui.show_header(HEADER_TITLE);
        let check = self.check(ui);

        if check.all_present() {
            ui.success("All required packages are already installed!");
            return RunResult::new(check, Vec::new(), self.settings.policy);
        }

        ui.message(&format!("Missing packages: {}", check.missing.join(", ")));
        ui.message(&format!("Installing {} packages...", check.missing.len()));

        let installer = self.installer();
        let installs: Vec<InstallReport> = check
            .missing
            .iter()
            .map(|package| installer.install(package, ui))
            .collect();

        let result = RunResult::new(check, installs, self.settings.policy);
        tracing::info!(
            "installed {} of {} missing packages",
            result.successes,
            result.missing.len()
        );
        ui.show_summary(&result.summary());
        result
    }
}
