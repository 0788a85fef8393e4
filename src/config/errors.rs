//! Configuration errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "QBE_CONFIG_READ_FAILED",
            ConfigError::Parse(_) => "QBE_CONFIG_PARSE_FAILED",
            ConfigError::Invalid(_) => "QBE_CONFIG_INVALID",
        }
    }
}
