//! Query Engine for qbedb
//!
//! Turns a pattern document into the set of matching document ids.
//!
//! # Semantics
//!
//! - Sibling fields are ANDed (set intersection)
//! - Nested objects recurse into the trie
//! - Array patterns match stored arrays that contain every element
//! - The empty pattern matches everything; a nested empty object requires
//!   the field to be present as an object

mod engine;

pub use engine::{match_node, QueryEngine};
