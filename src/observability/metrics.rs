//! Metrics registry for qbedb
//!
//! - Counters only, monotonic
//! - Reset only on process start
//! - Atomic increments with Relaxed ordering

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for a protocol session
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Input lines consumed, blank lines included
    lines_read: AtomicU64,
    /// Successful add commands
    adds: AtomicU64,
    /// Successful get commands
    gets: AtomicU64,
    /// Successful delete commands
    deletes: AtomicU64,
    /// Texts written by get
    documents_returned: AtomicU64,
    /// Documents removed by delete
    documents_removed: AtomicU64,
    /// Lines skipped because the literal failed to parse
    parse_failures: AtomicU64,
    /// Lines with an unrecognized keyword
    unknown_commands: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment lines read, returning the new total
    pub fn increment_lines(&self) -> u64 {
        self.lines_read.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn increment_adds(&self) {
        self.adds.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a get and the number of texts it produced
    pub fn record_get(&self, returned: u64) {
        self.gets.fetch_add(1, Ordering::Relaxed);
        self.documents_returned.fetch_add(returned, Ordering::Relaxed);
    }

    /// Record a delete and the number of documents it removed
    pub fn record_delete(&self, removed: u64) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
        self.documents_removed.fetch_add(removed, Ordering::Relaxed);
    }

    pub fn increment_parse_failures(&self) {
        self.parse_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_unknown_commands(&self) {
        self.unknown_commands.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            lines_read: self.lines_read.load(Ordering::Relaxed),
            adds: self.adds.load(Ordering::Relaxed),
            gets: self.gets.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            documents_returned: self.documents_returned.load(Ordering::Relaxed),
            documents_removed: self.documents_removed.load(Ordering::Relaxed),
            parse_failures: self.parse_failures.load(Ordering::Relaxed),
            unknown_commands: self.unknown_commands.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub lines_read: u64,
    pub adds: u64,
    pub gets: u64,
    pub deletes: u64,
    pub documents_returned: u64,
    pub documents_removed: u64,
    pub parse_failures: u64,
    pub unknown_commands: u64,
}
