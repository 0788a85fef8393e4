//! Document subsystem for qbedb
//!
//! Owns document identity, the parsed value model and the registry that
//! maps identities back to original text.
//!
//! # Invariants
//!
//! - Every insertion mints a fresh `DocumentId`
//! - Original text is stored verbatim and returned byte-for-byte
//! - The parsed field map is retained for index maintenance on delete

mod errors;
mod parse;
mod registry;
mod types;

pub use errors::{DocumentError, DocumentErrorCode, DocumentResult, Severity};
pub use parse::parse_document;
pub use registry::DocumentRegistry;
pub use types::{DocumentId, DocumentRecord, Fields};
