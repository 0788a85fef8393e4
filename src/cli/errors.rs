//! CLI-specific error types
//!
//! All CLI errors are FATAL: `main` prints them and exits non-zero.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::protocol::SessionError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error opening input or writing output
    IoError,
    /// The command session stopped on a fatal error
    SessionFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "QBE_CLI_CONFIG_ERROR",
            Self::IoError => "QBE_CLI_IO_ERROR",
            Self::SessionFailed => "QBE_CLI_SESSION_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Session failure
    pub fn session_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::SessionFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(format!("{} ({})", e, e.code()))
    }
}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        Self::session_failed(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(CliError::config_error("x").code_str(), "QBE_CLI_CONFIG_ERROR");
        assert_eq!(CliError::io_error("x").code_str(), "QBE_CLI_IO_ERROR");
        assert_eq!(CliError::session_failed("x").code_str(), "QBE_CLI_SESSION_FAILED");
    }

    #[test]
    fn test_from_config_error() {
        let err = CliError::from(ConfigError::Invalid("bad level".into()));
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
        assert!(err.message().contains("QBE_CONFIG_INVALID"));
    }

    #[test]
    fn test_display() {
        let err = CliError::io_error("cannot open commands.txt");
        assert_eq!(err.to_string(), "QBE_CLI_IO_ERROR: cannot open commands.txt");
    }
}
