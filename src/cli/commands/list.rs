//! List command implementation.
//!
//! The `pyensure list` command shows the resolved manifest, the probe name
//! each entry is checked under, and the install strategies in order.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::requirements::InstallStrategy;
use crate::ui::theme::EnsureTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    settings: Settings,
    args: ListArgs,
}

#[derive(Debug, Serialize)]
struct ListedPackage<'a> {
    name: &'a str,
    probe: &'a str,
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    python: &'a str,
    install_timeout_secs: u64,
    packages: Vec<ListedPackage<'a>>,
    strategies: &'a [InstallStrategy],
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(settings: Settings, args: ListArgs) -> Self {
        Self { settings, args }
    }

    fn listing(&self) -> Listing<'_> {
        Listing {
            python: &self.settings.python,
            install_timeout_secs: self.settings.install_timeout.as_secs(),
            packages: self
                .settings
                .manifest
                .iter()
                .map(|name| ListedPackage {
                    name,
                    probe: self.settings.aliases.resolve(name),
                })
                .collect(),
            strategies: &self.settings.strategies,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let listing = self.listing();

        if self.args.json {
            ui.output(&serde_json::to_string_pretty(&listing)?);
            return Ok(CommandResult::success());
        }

        let theme = EnsureTheme::detect();

        ui.output(&format!(
            "  {} {}",
            theme.header.apply_to("Python:"),
            theme.highlight.apply_to(listing.python)
        ));
        ui.output("");

        ui.output(&format!(
            "  {}",
            theme.header.apply_to(format!("Packages ({}):", listing.packages.len()))
        ));
        for package in &listing.packages {
            ui.output(&format!(
                "    {}",
                theme.format_package(package.name, package.probe)
            ));
        }
        ui.output("");

        ui.output(&format!("  {}", theme.header.apply_to("Strategies:")));
        for (i, strategy) in listing.strategies.iter().enumerate() {
            ui.output(&format!(
                "    {}. {} {}",
                i + 1,
                theme.highlight.apply_to(&strategy.name),
                theme.dim.apply_to(strategy.args.join(" "))
            ));
        }

        Ok(CommandResult::success())
    }
}
