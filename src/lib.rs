//! qbedb - An in-memory, trie-indexed query-by-example document store
//!
//! Documents are JSON objects. A pattern is a partial document: every field it
//! names must match (AND semantics), nested objects match recursively and arrays
//! match any stored array that contains all of the pattern's elements.

pub mod cli;
pub mod config;
pub mod document;
pub mod index;
pub mod observability;
pub mod protocol;
pub mod query;
pub mod store;
