//! Field-path trie
//!
//! Each node stands for "having reached this field path". Terminal values
//! (scalars and arrays) live in the node's leaf map; nested objects descend
//! into child nodes and record the document in the child's member set.
//!
//! # API
//!
//! - `insert(id, fields)` - Index every field path of a document
//! - `remove(id, fields)` - Mirror of insert; prunes emptied entries
//! - `TrieNode::lookup_field(field, value)` - Per-field match primitive

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::Value;

use super::key::LeafKey;
use crate::document::{DocumentId, Fields};
use crate::query;

/// One node of the field-path trie
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Nodes for deeper field names
    children: HashMap<String, TrieNode>,
    /// Terminal value -> documents holding exactly that value at this path
    leaves: HashMap<LeafKey, HashSet<DocumentId>>,
    /// Documents whose value at this path is an object (the root holds every document)
    members: HashSet<DocumentId>,
}

impl TrieNode {
    /// Child node for a field name
    pub fn child(&self, field: &str) -> Option<&TrieNode> {
        self.children.get(field)
    }

    /// Documents holding exactly `key` at this path
    pub fn leaf(&self, key: &LeafKey) -> Option<&HashSet<DocumentId>> {
        self.leaves.get(key)
    }

    /// Documents whose value at this path is an object
    pub fn members(&self) -> &HashSet<DocumentId> {
        &self.members
    }

    /// True when the node indexes nothing at all
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.leaves.is_empty() && self.members.is_empty()
    }

    /// Documents matching a single `field: value` constraint below this node.
    ///
    /// - Missing child: empty
    /// - Object value: full pattern match rooted at the child
    /// - Array value: union over stored arrays containing every pattern element
    /// - Scalar value: exact leaf lookup
    pub fn lookup_field<'a>(&'a self, field: &str, value: &Value) -> Cow<'a, HashSet<DocumentId>> {
        let Some(child) = self.children.get(field) else {
            return Cow::Owned(HashSet::new());
        };

        match value {
            Value::Object(nested) => query::match_node(child, nested),
            Value::Array(items) => {
                let pattern: Vec<LeafKey> = items.iter().map(LeafKey::from_json).collect();
                let mut matched = HashSet::new();
                for (key, ids) in &child.leaves {
                    if key.contains_all(&pattern) {
                        matched.extend(ids.iter().copied());
                    }
                }
                Cow::Owned(matched)
            }
            scalar => match child.leaves.get(&LeafKey::from_json(scalar)) {
                Some(ids) => Cow::Borrowed(ids),
                None => Cow::Owned(HashSet::new()),
            },
        }
    }

    fn insert_fields(&mut self, id: DocumentId, fields: &Fields) {
        super::grow_stack(|| self.insert_level(id, fields));
    }

    fn insert_level(&mut self, id: DocumentId, fields: &Fields) {
        self.members.insert(id);

        for (field, value) in fields {
            let child = self.children.entry(field.clone()).or_default();
            match value {
                Value::Object(nested) => child.insert_fields(id, nested),
                terminal => {
                    child
                        .leaves
                        .entry(LeafKey::from_json(terminal))
                        .or_default()
                        .insert(id);
                }
            }
        }
    }

    fn remove_fields(&mut self, id: DocumentId, fields: &Fields) {
        super::grow_stack(|| self.remove_level(id, fields));
    }

    fn remove_level(&mut self, id: DocumentId, fields: &Fields) {
        self.members.remove(&id);

        for (field, value) in fields {
            let Some(child) = self.children.get_mut(field) else {
                continue;
            };

            match value {
                Value::Object(nested) => child.remove_fields(id, nested),
                terminal => {
                    let key = LeafKey::from_json(terminal);
                    if let Some(ids) = child.leaves.get_mut(&key) {
                        ids.remove(&id);
                        if ids.is_empty() {
                            child.leaves.remove(&key);
                        }
                    }
                }
            }

            if child.is_empty() {
                self.children.remove(field);
            }
        }
    }

    fn collect_stats(&self, stats: &mut IndexStats) {
        super::grow_stack(|| self.collect_level(stats));
    }

    fn collect_level(&self, stats: &mut IndexStats) {
        stats.nodes += 1;
        stats.leaf_keys += self.leaves.len();
        stats.postings += self.leaves.values().map(|ids| ids.len()).sum::<usize>();
        for child in self.children.values() {
            child.collect_stats(stats);
        }
    }
}

/// Structural counters for an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Trie nodes including the root
    pub nodes: usize,
    /// Distinct (path, value) leaf entries
    pub leaf_keys: usize,
    /// Total document ids across all leaf sets
    pub postings: usize,
}

/// Trie index over every field path of every stored document
#[derive(Debug, Default)]
pub struct TrieIndex {
    root: TrieNode,
}

impl TrieIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every field path of a document.
    pub fn insert(&mut self, id: DocumentId, fields: &Fields) {
        self.root.insert_fields(id, fields);
    }

    /// Remove a document previously indexed with the same fields.
    ///
    /// Emptied leaf entries and emptied child nodes are dropped.
    pub fn remove(&mut self, id: DocumentId, fields: &Fields) {
        self.root.remove_fields(id, fields);
    }

    /// Root node, the starting point of every match
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Walk the trie and count nodes and postings
    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats::default();
        self.root.collect_stats(&mut stats);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    fn id(n: u64) -> DocumentId {
        DocumentId::new(n)
    }

    fn ids(set: &HashSet<DocumentId>) -> Vec<u64> {
        let mut out: Vec<u64> = set.iter().map(|d| d.value()).collect();
        out.sort();
        out
    }

    #[test]
    fn test_insert_scalar_leaf() {
        let mut index = TrieIndex::new();
        index.insert(id(0), &fields(json!({"a": 1})));

        let child = index.root().child("a").unwrap();
        let leaf = child.leaf(&LeafKey::Int(1)).unwrap();
        assert_eq!(ids(leaf), vec![0]);
        assert_eq!(ids(index.root().members()), vec![0]);
    }

    #[test]
    fn test_nested_object_is_not_a_leaf() {
        let mut index = TrieIndex::new();
        index.insert(id(0), &fields(json!({"user": {"name": "a"}})));

        let user = index.root().child("user").unwrap();
        assert_eq!(ids(user.members()), vec![0]);
        assert!(user
            .leaf(&LeafKey::from_json(&json!({"name": "a"})))
            .is_none());

        let name = user.child("name").unwrap();
        assert_eq!(ids(name.leaf(&LeafKey::String("a".into())).unwrap()), vec![0]);
    }

    #[test]
    fn test_array_stored_as_single_leaf() {
        let mut index = TrieIndex::new();
        index.insert(id(0), &fields(json!({"tags": ["x", "y"]})));

        let tags = index.root().child("tags").unwrap();
        let key = LeafKey::from_json(&json!(["x", "y"]));
        assert_eq!(ids(tags.leaf(&key).unwrap()), vec![0]);
        assert!(tags.leaf(&LeafKey::String("x".into())).is_none());
    }

    #[test]
    fn test_shared_leaf_set() {
        let mut index = TrieIndex::new();
        index.insert(id(0), &fields(json!({"a": 1})));
        index.insert(id(1), &fields(json!({"a": 1, "b": 2})));

        let a = index.root().child("a").unwrap();
        assert_eq!(ids(a.leaf(&LeafKey::Int(1)).unwrap()), vec![0, 1]);
    }

    #[test]
    fn test_remove_drops_empty_leaf_entry() {
        let mut index = TrieIndex::new();
        let doc = fields(json!({"a": 1, "b": 2}));
        index.insert(id(0), &doc);
        index.insert(id(1), &fields(json!({"a": 1})));

        index.remove(id(0), &doc);

        let a = index.root().child("a").unwrap();
        assert_eq!(ids(a.leaf(&LeafKey::Int(1)).unwrap()), vec![1]);
        assert!(index.root().child("b").is_none());
    }

    #[test]
    fn test_remove_everything_leaves_bare_root() {
        let mut index = TrieIndex::new();
        let first = fields(json!({"a": {"b": {"c": [1, 2]}}, "d": null}));
        let second = fields(json!({"a": {"b": 3}}));
        index.insert(id(0), &first);
        index.insert(id(1), &second);

        index.remove(id(1), &second);
        index.remove(id(0), &first);

        assert!(index.root().is_empty());
        assert_eq!(
            index.stats(),
            IndexStats {
                nodes: 1,
                leaf_keys: 0,
                postings: 0
            }
        );
    }

    #[test]
    fn test_lookup_field_scalar() {
        let mut index = TrieIndex::new();
        index.insert(id(0), &fields(json!({"a": 1})));
        index.insert(id(1), &fields(json!({"a": 2})));

        assert_eq!(ids(&index.root().lookup_field("a", &json!(1))), vec![0]);
        assert!(index.root().lookup_field("a", &json!(3)).is_empty());
        assert!(index.root().lookup_field("missing", &json!(1)).is_empty());
    }

    #[test]
    fn test_lookup_field_array_superset() {
        let mut index = TrieIndex::new();
        index.insert(id(0), &fields(json!({"tags": ["x", "y", "z"]})));
        index.insert(id(1), &fields(json!({"tags": ["x"]})));
        index.insert(id(2), &fields(json!({"tags": "x"})));

        let root = index.root();
        assert_eq!(ids(&root.lookup_field("tags", &json!(["z", "x"]))), vec![0]);
        assert_eq!(ids(&root.lookup_field("tags", &json!(["x"]))), vec![0, 1]);
        assert!(root.lookup_field("tags", &json!(["x", "w"])).is_empty());
        // Scalar pattern matches only the scalar leaf, not arrays containing it
        assert_eq!(ids(&root.lookup_field("tags", &json!("x"))), vec![2]);
    }

    #[test]
    fn test_lookup_field_nested() {
        let mut index = TrieIndex::new();
        index.insert(id(0), &fields(json!({"user": {"name": "a", "age": 1}})));

        let root = index.root();
        assert_eq!(ids(&root.lookup_field("user", &json!({"name": "a"}))), vec![0]);
        assert!(root.lookup_field("user", &json!({"name": "b"})).is_empty());
    }

    #[test]
    fn test_stats() {
        let mut index = TrieIndex::new();
        index.insert(id(0), &fields(json!({"a": 1, "b": {"c": true}})));
        index.insert(id(1), &fields(json!({"a": 1})));

        let stats = index.stats();
        assert_eq!(stats.nodes, 4); // root, a, b, b.c
        assert_eq!(stats.leaf_keys, 2);
        assert_eq!(stats.postings, 3);
    }
}
