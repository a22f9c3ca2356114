//! Error types for pyensure operations.
//!
//! This module defines [`EnsureError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors abort the run before any package is probed
//! - Command execution errors are values: the checker and installer consume
//!   them and turn them into "not present" or "strategy failed"
//! - Use `anyhow::Error` (via `EnsureError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pyensure operations.
#[derive(Debug, Error)]
pub enum EnsureError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The child process could not be spawned or waited on.
    #[error("Could not run '{command}': {message}")]
    CommandLaunch { command: String, message: String },

    /// The child process exceeded its timeout and was killed.
    #[error("Command timed out after {secs}s: {command}")]
    CommandTimedOut { command: String, secs: u64 },

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EnsureError {
    /// Whether this error comes from the configuration layer.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for pyensure operations.
pub type Result<T> = std::result::Result<T, EnsureError>;
