//! Protocol session
//!
//! Reads commands line by line, applies each to the store before reading
//! the next, and writes `get` results to the output.
//!
//! # Behavior
//!
//! - Parse failures are logged at ERROR and the line is skipped
//! - Unknown keywords are no-ops
//! - I/O failures and registry desynchronization stop the session (FATAL)
//! - Output is flushed once input is exhausted

use std::io::{BufRead, Write};

use super::command::{parse_line, Command};
use super::errors::{SessionError, SessionResult};
use crate::config::Config;
use crate::document::DocumentError;
use crate::observability::{
    log_event, log_event_with_fields, trace_event, Event, Logger, MetricsRegistry,
};
use crate::store::DocumentStore;

/// A single-threaded command session over one store
pub struct Session<W: Write> {
    store: DocumentStore,
    output: W,
    metrics: MetricsRegistry,
    progress_interval: u64,
}

impl<W: Write> Session<W> {
    /// Create a session over an empty store
    pub fn new(output: W, config: &Config) -> Self {
        Self::with_store(DocumentStore::new(), output, config)
    }

    /// Create a session over an existing store
    pub fn with_store(store: DocumentStore, output: W, config: &Config) -> Self {
        Self {
            store,
            output,
            metrics: MetricsRegistry::new(),
            progress_interval: config.progress_interval,
        }
    }

    /// Process every line of `input`, then flush the output.
    pub fn run<R: BufRead>(&mut self, input: R) -> SessionResult<()> {
        log_event(Event::Serving);

        let result = self.run_lines(input);
        if let Err(ref e) = result {
            let document = e.document_id().map(|id| id.to_string());
            let mut fields = vec![("code", e.code_str()), ("message", e.message())];
            if let Some(document) = document.as_deref() {
                fields.push(("document_id", document));
            }
            log_event_with_fields(e.code().event(), &fields);
            return result;
        }

        let lines = self.metrics.snapshot().lines_read.to_string();
        let documents = self.store.len().to_string();
        log_event_with_fields(
            Event::ShutdownComplete,
            &[("documents", documents.as_str()), ("lines", lines.as_str())],
        );
        Ok(())
    }

    fn run_lines<R: BufRead>(&mut self, mut input: R) -> SessionResult<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .map_err(|e| SessionError::io("Failed to read input", e))?;
            if read == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            self.handle_line(&buf)?;
        }
        self.output
            .flush()
            .map_err(|e| SessionError::io("Failed to flush output", e))
    }

    /// Parse and apply one raw input line.
    ///
    /// Bytes that are not UTF-8 are a parse failure like any malformed literal.
    pub fn handle_line(&mut self, raw: &[u8]) -> SessionResult<()> {
        let line_no = self.metrics.increment_lines();
        if self.progress_interval > 0 && line_no % self.progress_interval == 0 {
            let lines = line_no.to_string();
            log_event_with_fields(Event::Progress, &[("lines", lines.as_str())]);
        }

        let parsed = std::str::from_utf8(raw)
            .map_err(DocumentError::from)
            .and_then(parse_line);

        match parsed {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(()),
            Err(e) if e.is_fatal() => Err(e.into()),
            Err(e) => {
                self.metrics.increment_parse_failures();
                let line_no = line_no.to_string();
                Logger::error(
                    Event::CommandParseFailed.as_str(),
                    &[
                        ("code", e.code().code()),
                        ("line", line_no.as_str()),
                        ("reason", e.message()),
                    ],
                );
                Ok(())
            }
        }
    }

    /// Apply a parsed command to the store.
    pub fn execute(&mut self, command: Command) -> SessionResult<()> {
        match command {
            Command::Add { text, fields } => {
                let id = self.store.add(text, fields);
                self.metrics.increment_adds();
                let id = id.to_string();
                trace_event(Event::DocumentAdded, &[("id", id.as_str())]);
            }
            Command::Get { pattern } => {
                let texts = self.store.get(&pattern)?;
                for text in &texts {
                    writeln!(self.output, "{}", text)
                        .map_err(|e| SessionError::io("Failed to write output", e))?;
                }
                self.metrics.record_get(texts.len() as u64);
                let matched = texts.len().to_string();
                trace_event(Event::QueryExecuted, &[("matched", matched.as_str())]);
            }
            Command::Delete { pattern } => {
                let removed = self.store.delete(&pattern)?;
                self.metrics.record_delete(removed as u64);
                let removed = removed.to_string();
                trace_event(Event::DeleteExecuted, &[("removed", removed.as_str())]);
            }
            Command::Unknown { keyword } => {
                self.metrics.increment_unknown_commands();
                trace_event(Event::CommandUnknown, &[("keyword", keyword.as_str())]);
            }
        }
        Ok(())
    }

    /// The store this session mutates
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Counters accumulated so far
    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Consume the session, returning the store and the output writer
    pub fn into_parts(self) -> (DocumentStore, W) {
        (self.store, self.output)
    }
}
