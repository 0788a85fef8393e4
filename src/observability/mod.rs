//! Observability subsystem for qbedb
//!
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle and command events
//! - Monotonic operation counters
//!
//! Observability is read-only: it never changes what a command does,
//! and a failure to log never fails the caller.
//!
//! # Usage
//!
//! ```ignore
//! use qbedb::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::Progress, &[("lines", "1000")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_adds();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a lifecycle event at INFO (FATAL for fatal events)
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields at INFO (FATAL for fatal events)
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

/// Log a per-command event at TRACE
pub fn trace_event(event: Event, fields: &[(&str, &str)]) {
    Logger::trace(event.as_str(), fields);
}
