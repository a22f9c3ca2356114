//! Effective settings for a run.
//!
//! Built-in defaults, then the config file, then command-line flags.

use std::time::Duration;

use crate::config::schema::EnsureConfig;
use crate::error::{EnsureError, Result};
use crate::requirements::checker::is_valid_module_path;
use crate::requirements::{builtin_strategies, AliasTable, InstallStrategy, Manifest};
use crate::runner::SuccessPolicy;
use crate::shell::default_python;

/// Seconds an install attempt may run before it is killed.
pub const DEFAULT_INSTALL_TIMEOUT_SECS: u64 = 120;

/// Seconds a presence probe may run before it is killed.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 30;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub python: Option<String>,
    pub timeout_secs: Option<u64>,
    pub strict: bool,
}

/// Fully resolved, validated settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub python: String,
    pub install_timeout: Duration,
    pub probe_timeout: Duration,
    pub policy: SuccessPolicy,
    pub manifest: Manifest,
    pub aliases: AliasTable,
    pub strategies: Vec<InstallStrategy>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python: default_python().to_string(),
            install_timeout: Duration::from_secs(DEFAULT_INSTALL_TIMEOUT_SECS),
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            policy: SuccessPolicy::AnySuccess,
            manifest: Manifest::builtin(),
            aliases: AliasTable::builtin(),
            strategies: builtin_strategies(),
        }
    }
}

impl Settings {
    /// Layer `config` and `overrides` over the defaults and validate.
    pub fn resolve(config: &EnsureConfig, overrides: &CliOverrides) -> Result<Self> {
        let python = overrides
            .python
            .clone()
            .or_else(|| config.python.clone())
            .unwrap_or_else(|| default_python().to_string());
        if python.trim().is_empty() {
            return Err(invalid("python must not be empty"));
        }

        let install_secs = overrides
            .timeout_secs
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_INSTALL_TIMEOUT_SECS);
        let probe_secs = config
            .probe_timeout_secs
            .unwrap_or(DEFAULT_PROBE_TIMEOUT_SECS);
        if install_secs == 0 || probe_secs == 0 {
            return Err(invalid("timeouts must be at least one second"));
        }

        let strict = overrides.strict || config.strict.unwrap_or(false);
        let policy = if strict {
            SuccessPolicy::AllSucceed
        } else {
            SuccessPolicy::AnySuccess
        };

        let mut manifest = match &config.packages {
            Some(packages) => Manifest::new(packages.iter().cloned())?,
            None => Manifest::builtin(),
        };
        manifest.extend_unique(config.extra_packages.iter().cloned())?;

        for (package, probe) in &config.aliases {
            if !is_valid_module_path(probe) {
                return Err(invalid(&format!(
                    "alias for '{}' ('{}') is not a valid module path",
                    package, probe
                )));
            }
        }
        let aliases = AliasTable::builtin().with_overrides(&config.aliases);

        let strategies = match &config.strategies {
            Some(strategies) => strategies.clone(),
            None => builtin_strategies(),
        };
        validate_strategies(&strategies)?;

        Ok(Self {
            python,
            install_timeout: Duration::from_secs(install_secs),
            probe_timeout: Duration::from_secs(probe_secs),
            policy,
            manifest,
            aliases,
            strategies,
        })
    }
}

fn validate_strategies(strategies: &[InstallStrategy]) -> Result<()> {
    if strategies.is_empty() {
        return Err(invalid("at least one install strategy is required"));
    }
    for (i, strategy) in strategies.iter().enumerate() {
        if strategy.name.trim().is_empty() {
            return Err(invalid(&format!("strategy {} has no name", i + 1)));
        }
        if strategy.args.is_empty() {
            return Err(invalid(&format!(
                "strategy '{}' has no arguments",
                strategy.name
            )));
        }
    }
    Ok(())
}

fn invalid(message: &str) -> EnsureError {
    EnsureError::ConfigValidationError {
        message: message.to_string(),
    }
}
