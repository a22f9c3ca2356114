//! Configuration file schema.
//!
//! Every field is optional; an absent file and an empty file both mean
//! "use the built-in defaults".
//!
//! ```yaml
//! python: /opt/venv/bin/python
//! timeout_secs: 300
//! strict: true
//! extra_packages: [attrs]
//! aliases:
//!   attrs: attr
//! strategies:
//!   - name: user
//!     args: ["-m", "pip", "install", "--user", "{package}"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::requirements::InstallStrategy;

/// Contents of a pyensure config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnsureConfig {
    /// Interpreter used for probes and installs.
    pub python: Option<String>,

    /// Seconds before an install attempt is killed.
    pub timeout_secs: Option<u64>,

    /// Seconds before a presence probe is killed.
    pub probe_timeout_secs: Option<u64>,

    /// Require every missing package to install for the run to succeed.
    pub strict: Option<bool>,

    /// Replaces the built-in manifest.
    pub packages: Option<Vec<String>>,

    /// Appended to the manifest.
    pub extra_packages: Vec<String>,

    /// Merged over the built-in alias table.
    pub aliases: BTreeMap<String, String>,

    /// Replaces the built-in strategy list.
    pub strategies: Option<Vec<InstallStrategy>>,
}
