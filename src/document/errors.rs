//! Document error types
//!
//! Error codes:
//! - QBE_PARSE_FAILED (ERROR)
//! - QBE_DOCUMENT_NOT_FOUND (FATAL)

use std::fmt;

use super::types::DocumentId;

/// Severity levels for document errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The offending input is skipped, processing continues
    Error,
    /// Registry and index disagree; the session must stop
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Document error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentErrorCode {
    /// Document literal is not a well-formed JSON object
    QbeParseFailed,
    /// DocumentId unknown to the registry
    QbeDocumentNotFound,
}

impl DocumentErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            DocumentErrorCode::QbeParseFailed => "QBE_PARSE_FAILED",
            DocumentErrorCode::QbeDocumentNotFound => "QBE_DOCUMENT_NOT_FOUND",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            DocumentErrorCode::QbeParseFailed => Severity::Error,
            DocumentErrorCode::QbeDocumentNotFound => Severity::Fatal,
        }
    }
}

impl fmt::Display for DocumentErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Document error with context
#[derive(Debug)]
pub struct DocumentError {
    code: DocumentErrorCode,
    message: String,
    document_id: Option<DocumentId>,
}

impl DocumentError {
    /// Create a parse failure error
    pub fn parse_failed(reason: impl Into<String>) -> Self {
        Self {
            code: DocumentErrorCode::QbeParseFailed,
            message: reason.into(),
            document_id: None,
        }
    }

    /// Create a not-found error for a registry lookup
    pub fn not_found(id: DocumentId) -> Self {
        Self {
            code: DocumentErrorCode::QbeDocumentNotFound,
            message: format!("Document {} is not registered", id),
            document_id: Some(id),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> DocumentErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending document id, if any
    pub fn document_id(&self) -> Option<DocumentId> {
        self.document_id
    }

    /// Returns whether this error must stop the session
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for DocumentError {}

impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> Self {
        Self::parse_failed(e.to_string())
    }
}

impl From<std::str::Utf8Error> for DocumentError {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::parse_failed(format!("Line is not valid UTF-8: {}", e))
    }
}

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;
