//! Document identity and value model

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level field map of a document or pattern.
pub type Fields = Map<String, Value>;

/// Opaque per-insertion identity.
///
/// Two structurally identical documents inserted separately receive
/// distinct ids; ids are never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(u64);

impl DocumentId {
    pub fn new(id: u64) -> Self {
        DocumentId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Registry entry for one inserted document.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    /// Identity minted at insertion
    pub id: DocumentId,
    /// Insertion order, strictly increasing
    pub sequence: u64,
    /// Original text, returned verbatim by queries
    pub text: String,
    /// Parsed fields, retained so delete can re-traverse exactly what was indexed
    pub fields: Fields,
}
