//! Error types for tab bar configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a tab bar configuration.
///
/// Rendering itself never fails; only configuration loading reports errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read tab bar config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::TabBarConfig`].
    #[error("failed to parse tab bar config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
