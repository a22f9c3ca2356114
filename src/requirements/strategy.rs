//! Installation strategies.
//!
//! A strategy is plain data: an argument template handed to the interpreter.
//! The installer walks the list in order, so there is no per-strategy logic.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::shell::Invocation;

/// Token replaced by the package identifier when a strategy is built.
pub const PACKAGE_PLACEHOLDER: &str = "{package}";

/// One way of invoking the package manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallStrategy {
    /// Short label shown in progress output.
    pub name: String,

    /// Arguments passed to the interpreter.
    pub args: Vec<String>,
}

impl InstallStrategy {
    /// Create a strategy from a name and argument template.
    pub fn new<S: Into<String>>(name: &str, args: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the concrete invocation for `package`.
    ///
    /// Every `{package}` token is substituted; a template without one gets
    /// the package appended as the final argument.
    pub fn build(&self, python: &str, package: &str, timeout: Duration) -> Invocation {
        let mut substituted = false;
        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|arg| {
                if arg.contains(PACKAGE_PLACEHOLDER) {
                    substituted = true;
                    arg.replace(PACKAGE_PLACEHOLDER, package)
                } else {
                    arg.clone()
                }
            })
            .collect();
        if !substituted {
            args.push(package.to_string());
        }
        Invocation::new(python, args).with_timeout(timeout)
    }
}

/// The built-in strategy list: user install, then overriding the
/// externally-managed-environment guard, then a forced reinstall.
pub fn builtin_strategies() -> Vec<InstallStrategy> {
    vec![
        InstallStrategy::new("user", ["-m", "pip", "install", "--user", PACKAGE_PLACEHOLDER]),
        InstallStrategy::new(
            "break-system-packages",
            [
                "-m",
                "pip",
                "install",
                "--user",
                "--break-system-packages",
                PACKAGE_PLACEHOLDER,
            ],
        ),
        InstallStrategy::new(
            "force-reinstall",
            [
                "-m",
                "pip",
                "install",
                "--user",
                "--force-reinstall",
                PACKAGE_PLACEHOLDER,
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_strategies_are_ordered() {
        let names: Vec<_> = builtin_strategies().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["user", "break-system-packages", "force-reinstall"]);
    }

    #[test]
    fn build_substitutes_placeholder() {
        let strategy = &builtin_strategies()[1];
        let inv = strategy.build("python3", "PyYAML", Duration::from_secs(120));
        assert_eq!(inv.program, "python3");
        assert_eq!(
            inv.args,
            [
                "-m",
                "pip",
                "install",
                "--user",
                "--break-system-packages",
                "PyYAML"
            ]
        );
        assert_eq!(inv.timeout, Some(Duration::from_secs(120)));
    }

    #[test]
    fn build_appends_package_without_placeholder() {
        let strategy = InstallStrategy::new("plain", ["-m", "pip", "install"]);
        let inv = strategy.build("python", "numpy", Duration::from_secs(1));
        assert_eq!(inv.args.last().map(String::as_str), Some("numpy"));
    }

    #[test]
    fn build_substitutes_inside_argument() {
        let strategy = InstallStrategy::new("extras", ["-m", "pip", "install", "{package}[all]"]);
        let inv = strategy.build("python", "plotly", Duration::from_secs(1));
        assert_eq!(inv.args.last().map(String::as_str), Some("plotly[all]"));
        assert_eq!(inv.args.len(), 4);
    }

    #[test]
    fn strategy_deserializes_from_yaml() {
        let yaml = "name: user\nargs: [\"-m\", \"pip\", \"install\", \"{package}\"]";
        let strategy: InstallStrategy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(strategy.name, "user");
        assert_eq!(strategy.args.len(), 4);
    }
}
