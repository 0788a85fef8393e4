//! Store Facade
//!
//! Composes the registry, the trie index and the query engine.
//!
//! # API
//!
//! - `add(text, fields)` - Register and index a document
//! - `get(pattern)` - Original text of every match, in insertion order
//! - `delete(pattern)` - Unindex and deregister every match
//!
//! A `QBE_DOCUMENT_NOT_FOUND` error from `get` or `delete` means the index
//! references an id the registry no longer holds. It is always FATAL.

use serde::Serialize;

use crate::document::{parse_document, DocumentId, DocumentRegistry, DocumentResult, Fields};
use crate::index::{IndexStats, TrieIndex};
use crate::query::QueryEngine;

/// Point-in-time store counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Live documents
    pub documents: usize,
    /// Trie shape
    pub index: IndexStats,
}

/// In-memory query-by-example document store
#[derive(Debug, Default)]
pub struct DocumentStore {
    registry: DocumentRegistry,
    index: TrieIndex,
}

impl DocumentStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document.
    ///
    /// `text` is kept verbatim for output; `fields` is what gets indexed.
    /// Identical documents are never deduplicated.
    pub fn add(&mut self, text: impl Into<String>, fields: Fields) -> DocumentId {
        let record = self.registry.register(text, fields);
        self.index.insert(record.id, &record.fields);
        record.id
    }

    /// Parse a document literal and insert it.
    pub fn add_text(&mut self, text: &str) -> DocumentResult<DocumentId> {
        let fields = parse_document(text)?;
        Ok(self.add(text, fields))
    }

    /// Original text of every document matching `pattern`, oldest first.
    pub fn get(&self, pattern: &Fields) -> DocumentResult<Vec<&str>> {
        let ids = QueryEngine::new(&self.index).matches(pattern);

        let mut ordered = ids
            .iter()
            .map(|&id| self.registry.sequence_of(id).map(|seq| (seq, id)))
            .collect::<DocumentResult<Vec<_>>>()?;
        ordered.sort_unstable();

        ordered
            .into_iter()
            .map(|(_, id)| self.registry.text_of(id))
            .collect()
    }

    /// Remove every document matching `pattern`.
    ///
    /// Returns the number of documents removed.
    pub fn delete(&mut self, pattern: &Fields) -> DocumentResult<usize> {
        let ids: Vec<DocumentId> = QueryEngine::new(&self.index)
            .matches(pattern)
            .iter()
            .copied()
            .collect();

        for &id in &ids {
            let fields = self.registry.fields_of(id)?;
            self.index.remove(id, fields);
            self.registry.deregister(id)?;
        }

        Ok(ids.len())
    }

    /// Number of live documents
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Current document count and index shape
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            documents: self.registry.len(),
            index: self.index.stats(),
        }
    }
}
