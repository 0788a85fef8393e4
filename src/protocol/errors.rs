//! Session error types
//!
//! Error codes:
//! - QBE_SESSION_IO (FATAL)
//! - QBE_REGISTRY_DESYNC (FATAL)
//!
//! Parse failures are not session errors: the offending line is logged
//! and skipped.

use std::fmt;
use std::io;

use crate::document::{DocumentError, DocumentId};
use crate::observability::Event;

/// Session error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionErrorCode {
    /// Reading input or writing output failed
    QbeSessionIo,
    /// Index and registry disagree about a document id
    QbeRegistryDesync,
}

impl SessionErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SessionErrorCode::QbeSessionIo => "QBE_SESSION_IO",
            SessionErrorCode::QbeRegistryDesync => "QBE_REGISTRY_DESYNC",
        }
    }

    /// Event logged when a session stops on this error
    pub fn event(&self) -> Event {
        match self {
            SessionErrorCode::QbeSessionIo => Event::StreamFailed,
            SessionErrorCode::QbeRegistryDesync => Event::RegistryDesync,
        }
    }
}

impl fmt::Display for SessionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Fatal session error
#[derive(Debug)]
pub struct SessionError {
    code: SessionErrorCode,
    message: String,
    document_id: Option<DocumentId>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl SessionError {
    /// Create an I/O error
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: SessionErrorCode::QbeSessionIo,
            message: message.into(),
            document_id: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a registry desynchronization error
    pub fn registry_desync(source: DocumentError) -> Self {
        Self {
            code: SessionErrorCode::QbeRegistryDesync,
            message: source.message().to_string(),
            document_id: source.document_id(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SessionErrorCode {
        self.code
    }

    /// Returns the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Document the index referenced but the registry did not hold
    pub fn document_id(&self) -> Option<DocumentId> {
        self.document_id
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[FATAL] {}: {}", self.code, self.message)
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        Self::io(e.to_string(), e)
    }
}

impl From<DocumentError> for SessionError {
    fn from(e: DocumentError) -> Self {
        Self::registry_desync(e)
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
