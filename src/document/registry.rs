//! Document Registry
//!
//! Single owner of document data. Everything else (trie leaves, query
//! results) holds `DocumentId`s by value.
//!
//! # Invariants
//!
//! - Ids are minted fresh for every `register` call and never reused
//! - Sequence numbers strictly increase and are never reused
//! - A record exists from `register` until `deregister` of the same id

use std::collections::HashMap;

use super::errors::{DocumentError, DocumentResult};
use super::types::{DocumentId, DocumentRecord, Fields};

/// Registry of live documents keyed by identity
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    records: HashMap<DocumentId, DocumentRecord>,
    next_id: u64,
    next_sequence: u64,
}

impl DocumentRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document, returning its freshly created record.
    ///
    /// Never fails and never deduplicates: identical text registered twice
    /// yields two records.
    pub fn register(&mut self, text: impl Into<String>, fields: Fields) -> &DocumentRecord {
        let id = DocumentId::new(self.next_id);
        self.next_id += 1;

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.records.entry(id).or_insert(DocumentRecord {
            id,
            sequence,
            text: text.into(),
            fields,
        })
    }

    /// Original text of a registered document
    pub fn text_of(&self, id: DocumentId) -> DocumentResult<&str> {
        self.record(id).map(|r| r.text.as_str())
    }

    /// Insertion sequence number of a registered document
    pub fn sequence_of(&self, id: DocumentId) -> DocumentResult<u64> {
        self.record(id).map(|r| r.sequence)
    }

    /// Parsed fields retained at insertion
    pub fn fields_of(&self, id: DocumentId) -> DocumentResult<&Fields> {
        self.record(id).map(|r| &r.fields)
    }

    /// Full record of a registered document
    pub fn record(&self, id: DocumentId) -> DocumentResult<&DocumentRecord> {
        self.records.get(&id).ok_or_else(|| DocumentError::not_found(id))
    }

    /// Remove a document, returning its record
    pub fn deregister(&mut self, id: DocumentId) -> DocumentResult<DocumentRecord> {
        self.records.remove(&id).ok_or_else(|| DocumentError::not_found(id))
    }

    /// Number of live documents
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
