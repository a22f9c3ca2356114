//! The package manifest.

use crate::error::{EnsureError, Result};

/// Packages guaranteed by default, in installation order.
pub const DEFAULT_PACKAGES: &[&str] = &[
    "pandas",
    "numpy",
    "requests",
    "beautifulsoup4",
    "lxml",
    "urllib3",
    "python-dateutil",
    "pytz",
    "pydantic",
    "email-validator",
    "PyYAML",
    "xmltodict",
    "defusedxml",
    "jinja2",
    "cryptography",
    "pyjwt",
    "passlib",
    "openpyxl",
    "xlsxwriter",
    "pypdf2",
    "reportlab",
    "pillow",
    "qrcode",
    "opencv-python-headless",
    "scipy",
    "sympy",
    "matplotlib",
    "seaborn",
    "plotly",
    "fuzzywuzzy",
    "nltk",
    "textblob",
    "phonenumbers",
    "babel",
    "sqlalchemy",
    "pymongo",
    "scikit-learn",
    "transformers",
];

/// Ordered, duplicate-free list of required packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    /// The built-in manifest.
    pub fn builtin() -> Self {
        Self {
            entries: DEFAULT_PACKAGES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a manifest, rejecting invalid or duplicate identifiers.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut manifest = Self {
            entries: Vec::new(),
        };
        for entry in entries {
            let entry = entry.into();
            validate_identifier(&entry)?;
            if manifest.contains(&entry) {
                return Err(EnsureError::ConfigValidationError {
                    message: format!("Package '{}' is listed more than once", entry),
                });
            }
            manifest.entries.push(entry);
        }
        Ok(manifest)
    }

    /// Append packages not already present, keeping order.
    pub fn extend_unique<I, S>(&mut self, extra: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for entry in extra {
            let entry = entry.into();
            validate_identifier(&entry)?;
            if !self.contains(&entry) {
                self.entries.push(entry);
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, package: &str) -> bool {
        self.entries.iter().any(|e| e == package)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Identifiers are handed to pip as a positional argument, so anything that
/// pip would read as a flag or split on whitespace is rejected.
fn validate_identifier(entry: &str) -> Result<()> {
    if entry.trim().is_empty() {
        return Err(EnsureError::ConfigValidationError {
            message: "Package names must not be empty".to_string(),
        });
    }
    if entry.starts_with('-') {
        return Err(EnsureError::ConfigValidationError {
            message: format!("Package '{}' looks like a command-line flag", entry),
        });
    }
    if entry.chars().any(char::is_whitespace) {
        return Err(EnsureError::ConfigValidationError {
            message: format!("Package '{}' contains whitespace", entry),
        });
    }
    Ok(())
}
