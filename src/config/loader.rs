//! Configuration file discovery and loading.

use crate::config::schema::EnsureConfig;
use crate::error::{EnsureError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the project config, relative to the project root.
pub const CONFIG_DIR: &str = ".pyensure";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Where configuration is read from.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Path passed with `--config`; must exist.
    pub explicit: Option<PathBuf>,

    /// Project config: .pyensure/config.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path, explicit: Option<&Path>) -> Self {
        Self {
            explicit: explicit.map(Path::to_path_buf),
            project: Self::find_project_config(project_root),
        }
    }

    /// Find project config at .pyensure/config.yml
    fn find_project_config(project_root: &Path) -> Option<PathBuf> {
        let path = project_root.join(CONFIG_DIR).join(CONFIG_FILE);
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }

    /// The file that will be loaded, if any. An explicit path wins.
    pub fn effective(&self) -> Option<&Path> {
        self.explicit.as_deref().or(self.project.as_deref())
    }
}

/// Parse config content, attributing errors to `path`.
pub fn parse_config(content: &str, path: &Path) -> Result<EnsureConfig> {
    if content.trim().is_empty() {
        return Ok(EnsureConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| EnsureError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<EnsureConfig> {
    if !path.exists() {
        return Err(EnsureError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Load configuration for a project.
///
/// Returns the defaults when no project config exists and no explicit path
/// was given.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<EnsureConfig> {
    let paths = ConfigPaths::discover(project_root, explicit);
    match paths.effective() {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_config_file(path)
        }
        None => {
            tracing::debug!("no config file under {}, using defaults", project_root.display());
            Ok(EnsureConfig::default())
        }
    }
}
