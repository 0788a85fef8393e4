//! Store subsystem for qbedb
//!
//! `DocumentStore` is the single entry point for add / get / delete.
//! It is a plain owned value: callers that need sharing across threads
//! wrap the whole store in one lock, since delete's match-then-remove
//! must observe a consistent index.

mod document_store;

pub use document_store::{DocumentStore, StoreStats};
