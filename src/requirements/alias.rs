//! Alias table mapping installable names to import names.
//!
//! Some distributions are published under one name and imported under
//! another (`PyYAML` is imported as `yaml`). Presence checks probe the
//! import name; installs always use the published name.

use std::collections::BTreeMap;

/// Built-in aliases for the default manifest.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("beautifulsoup4", "bs4"),
    ("scikit-learn", "sklearn"),
    ("pillow", "PIL"),
    ("opencv-python-headless", "cv2"),
    ("python-dateutil", "dateutil"),
    ("PyYAML", "yaml"),
    ("email-validator", "email_validator"),
    ("pyjwt", "jwt"),
    ("pypdf2", "PyPDF2"),
];

/// Immutable mapping from manifest identifier to probe identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    /// The built-in alias table.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_ALIASES.iter().copied())
    }

    /// Build a table from `(package, probe_name)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Return a new table with `overrides` layered on top.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (package, probe) in overrides {
            self.entries.insert(package.clone(), probe.clone());
        }
        self
    }

    /// Resolve the identifier to probe for `package`.
    ///
    /// Falls back to `package` itself when no alias exists.
    pub fn resolve<'a>(&'a self, package: &'a str) -> &'a str {
        self.entries
            .get(package)
            .map(String::as_str)
            .unwrap_or(package)
    }

    /// The alias for `package`, if one is registered.
    pub fn get(&self, package: &str) -> Option<&str> {
        self.entries.get(package).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(package, probe_name)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
