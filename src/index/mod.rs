//! Trie Index subsystem for qbedb
//!
//! The index is derived, in-memory-only state keyed by nested field paths.
//!
//! # Invariants
//!
//! - Indexing is exhaustive: every field path of a document is indexed
//! - A leaf never keeps a value entry whose id set is empty
//! - Objects never become leaf keys; only scalars and arrays do
//! - Updates mirror the registry: insert after register, remove before deregister

mod key;
mod trie;

pub use key::LeafKey;
pub use trie::{IndexStats, TrieIndex, TrieNode};

/// Stack left before a recursive step allocates a new segment
const STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each extra stack segment
const STACK_SEGMENT: usize = 1024 * 1024;

/// Run one level of a recursive walk, growing the stack when it runs low.
///
/// Document depth is unbounded, so every recursion over a value tree or the
/// trie goes through here.
pub fn grow_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, f)
}
