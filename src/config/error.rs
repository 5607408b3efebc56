//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::message::ValidationError;
use crate::webhook::TargetError;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field that must be provided by CLI, environment or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid duration value.
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// The configured action is not a known button.
    #[error("Invalid action: {0}")]
    InvalidAction(#[source] ValidationError),

    /// The webhook endpoint or token is unusable.
    #[error(transparent)]
    Target(#[from] TargetError),
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    /// The webhook URL field.
    pub const WEBHOOK: &str = "webhook";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
