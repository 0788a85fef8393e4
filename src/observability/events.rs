//! Observability events for qbedb
//!
//! Every line the logger writes names one of these events.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Input stream open, accepting commands
    Serving,
    /// Input exhausted and output flushed
    ShutdownComplete,

    // Commands
    /// Document literal failed to parse; line skipped
    CommandParseFailed,
    /// Keyword other than add/get/delete; no-op
    CommandUnknown,
    /// Document inserted
    DocumentAdded,
    /// Query answered
    QueryExecuted,
    /// Delete applied
    DeleteExecuted,
    /// Periodic line count
    Progress,

    // Failures
    /// Index referenced an id the registry does not hold (FATAL)
    RegistryDesync,
    /// Reading input or writing output failed (FATAL)
    StreamFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "QBEDB_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "QBEDB_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::CommandParseFailed => "COMMAND_PARSE_FAILED",
            Event::CommandUnknown => "COMMAND_UNKNOWN",
            Event::DocumentAdded => "DOCUMENT_ADDED",
            Event::QueryExecuted => "QUERY_COMPLETE",
            Event::DeleteExecuted => "DELETE_COMPLETE",
            Event::Progress => "PROGRESS",

            Event::RegistryDesync => "REGISTRY_DESYNC",
            Event::StreamFailed => "STREAM_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::RegistryDesync | Event::StreamFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
