//! Configuration for qbedb
//!
//! Loaded from an optional JSON file. Every field has a default, so an
//! absent file and `{}` are equivalent. Unknown fields are rejected.
//!
//! ```json
//! { "progress_interval": 1000, "log_level": "info" }
//! ```

mod errors;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::Severity;

pub use errors::{ConfigError, ConfigResult};

const LOG_LEVELS: [&str; 4] = ["trace", "info", "warn", "error"];

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log a PROGRESS event every N input lines (0 disables)
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,

    /// Minimum log severity: trace, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_progress_interval() -> u64 {
    1000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            progress_interval: default_progress_interval(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "log_level '{}' must be one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// Minimum log severity derived from `log_level`
    pub fn severity(&self) -> Severity {
        self.log_level.parse().unwrap_or(Severity::Info)
    }
}
