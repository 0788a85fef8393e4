//! Recursive query-by-example matcher
//!
//! A pattern is a field map. Each `(field, value)` pair is resolved through
//! `TrieNode::lookup_field` and the per-field results are intersected.
//! An empty pattern matches every document that reached the node as an
//! object, which at the root is every stored document.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::document::{DocumentId, Fields};
use crate::index::{grow_stack, TrieIndex, TrieNode};

/// Match a pattern against the subtree rooted at `node`.
///
/// Short-circuits to the empty set as soon as any field, or the running
/// intersection, comes up empty.
pub fn match_node<'a>(node: &'a TrieNode, pattern: &Fields) -> Cow<'a, HashSet<DocumentId>> {
    grow_stack(|| match_level(node, pattern))
}

fn match_level<'a>(node: &'a TrieNode, pattern: &Fields) -> Cow<'a, HashSet<DocumentId>> {
    if pattern.is_empty() {
        return Cow::Borrowed(node.members());
    }

    let mut result: Option<Cow<'a, HashSet<DocumentId>>> = None;

    for (field, value) in pattern {
        let matched = node.lookup_field(field, value);
        if matched.is_empty() {
            return Cow::Owned(HashSet::new());
        }

        let narrowed = match result.take() {
            None => matched,
            Some(acc) => {
                let mut acc = acc.into_owned();
                acc.retain(|id| matched.contains(id));
                Cow::Owned(acc)
            }
        };

        if narrowed.is_empty() {
            return narrowed;
        }
        result = Some(narrowed);
    }

    result.unwrap_or_default()
}

/// Read-only matcher over a trie index
pub struct QueryEngine<'a> {
    index: &'a TrieIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a TrieIndex) -> Self {
        Self { index }
    }

    /// Ids of every document matching `pattern`, in no particular order.
    pub fn matches(&self, pattern: &Fields) -> Cow<'a, HashSet<DocumentId>> {
        match_node(self.index.root(), pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    fn build(docs: &[Value]) -> TrieIndex {
        let mut index = TrieIndex::new();
        for (n, doc) in docs.iter().enumerate() {
            index.insert(DocumentId::new(n as u64), &fields(doc.clone()));
        }
        index
    }

    fn run(index: &TrieIndex, pattern: Value) -> Vec<u64> {
        let engine = QueryEngine::new(index);
        let mut out: Vec<u64> = engine
            .matches(&fields(pattern))
            .iter()
            .map(|id| id.value())
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_empty_pattern_matches_all() {
        let index = build(&[json!({"a": 1}), json!({}), json!({"b": [1]})]);
        assert_eq!(run(&index, json!({})), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_index() {
        let index = TrieIndex::new();
        assert!(run(&index, json!({})).is_empty());
        assert!(run(&index, json!({"a": 1})).is_empty());
    }

    #[test]
    fn test_and_semantics() {
        let index = build(&[
            json!({"a": 1, "b": 2}),
            json!({"a": 1, "b": 3}),
            json!({"a": 2, "b": 2}),
        ]);

        assert_eq!(run(&index, json!({"a": 1})), vec![0, 1]);
        assert_eq!(run(&index, json!({"b": 2})), vec![0, 2]);
        assert_eq!(run(&index, json!({"a": 1, "b": 2})), vec![0]);
        assert!(run(&index, json!({"a": 2, "b": 3})).is_empty());
    }

    #[test]
    fn test_field_order_irrelevant() {
        let index = build(&[json!({"a": 1, "b": 2, "c": 3}), json!({"a": 1, "c": 3})]);
        let forward: Value = serde_json::from_str(r#"{"a":1,"c":3}"#).unwrap();
        let backward: Value = serde_json::from_str(r#"{"c":3,"a":1}"#).unwrap();
        assert_eq!(run(&index, forward), run(&index, backward));
    }

    #[test]
    fn test_missing_field_short_circuits() {
        let index = build(&[json!({"a": 1})]);
        assert!(run(&index, json!({"a": 1, "zzz": 1})).is_empty());
    }

    #[test]
    fn test_nested_match() {
        let index = build(&[
            json!({"user": {"name": "a", "age": 1}}),
            json!({"user": {"name": "b", "age": 1}}),
        ]);

        assert_eq!(run(&index, json!({"user": {"name": "a"}})), vec![0]);
        assert_eq!(run(&index, json!({"user": {"age": 1}})), vec![0, 1]);
        assert!(run(&index, json!({"user": {"name": "c"}})).is_empty());
    }

    #[test]
    fn test_deeply_nested_match() {
        let index = build(&[
            json!({"a": {"b": {"c": {"d": "deep"}}}}),
            json!({"a": {"b": {"c": {"d": "other"}}}}),
        ]);
        assert_eq!(run(&index, json!({"a": {"b": {"c": {"d": "deep"}}}})), vec![0]);
    }

    #[test]
    fn test_nested_empty_object_requires_object() {
        let index = build(&[
            json!({"a": {"x": 1}}),
            json!({"a": {}}),
            json!({"a": 5}),
            json!({"b": 1}),
        ]);
        assert_eq!(run(&index, json!({"a": {}})), vec![0, 1]);
    }

    #[test]
    fn test_nested_pattern_against_scalar_value() {
        let index = build(&[json!({"a": 5})]);
        assert!(run(&index, json!({"a": {"b": 5}})).is_empty());
    }

    #[test]
    fn test_scalar_pattern_against_object_value() {
        let index = build(&[json!({"a": {"b": 1}})]);
        assert!(run(&index, json!({"a": 1})).is_empty());
    }

    #[test]
    fn test_array_superset_match() {
        let index = build(&[
            json!({"tags": ["x", "y", "z"]}),
            json!({"tags": ["x", "w"]}),
        ]);

        assert_eq!(run(&index, json!({"tags": ["x", "z"]})), vec![0]);
        assert_eq!(run(&index, json!({"tags": ["x"]})), vec![0, 1]);
        assert!(run(&index, json!({"tags": ["y", "w"]})).is_empty());
    }

    #[test]
    fn test_empty_array_pattern_matches_any_stored_array() {
        let index = build(&[json!({"tags": ["x"]}), json!({"tags": []}), json!({"tags": "x"})]);
        assert_eq!(run(&index, json!({"tags": []})), vec![0, 1]);
    }

    #[test]
    fn test_array_of_objects() {
        let index = build(&[json!({"items": [{"k": 1, "v": 2}, {"k": 3}]})]);
        let pattern: Value = serde_json::from_str(r#"{"items":[{"v":2,"k":1}]}"#).unwrap();
        assert_eq!(run(&index, pattern), vec![0]);
        assert!(run(&index, json!({"items": [{"k": 1}]})).is_empty());
    }

    #[test]
    fn test_null_and_bool_values() {
        let index = build(&[json!({"flag": true, "x": null}), json!({"flag": false})]);
        assert_eq!(run(&index, json!({"flag": true})), vec![0]);
        assert_eq!(run(&index, json!({"x": null})), vec![0]);
    }

    #[test]
    fn test_intersection_equals_independent_matches() {
        let index = build(&[
            json!({"a": 1, "b": 2}),
            json!({"a": 1}),
            json!({"b": 2}),
            json!({"a": 1, "b": 2, "c": 3}),
        ]);

        let both = run(&index, json!({"a": 1, "b": 2}));
        let a: HashSet<u64> = run(&index, json!({"a": 1})).into_iter().collect();
        let b: HashSet<u64> = run(&index, json!({"b": 2})).into_iter().collect();
        let mut expected: Vec<u64> = a.intersection(&b).copied().collect();
        expected.sort();

        assert_eq!(both, expected);
        assert_eq!(both, vec![0, 3]);
    }
}
