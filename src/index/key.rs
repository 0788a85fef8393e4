//! Hashable leaf keys
//!
//! `serde_json::Value` is neither `Eq` nor `Hash`, so terminal values are
//! projected into `LeafKey` before they are stored in a trie leaf.
//!
//! Equality rules:
//! - Integers and floats never compare equal (`1` != `1.0`)
//! - Floats compare by bit pattern
//! - Objects (only found inside arrays) compare by content, field order ignored
//! - Arrays compare element-wise in order

use serde_json::Value;

/// Leaf key representing a scalar or array value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LeafKey {
    /// JSON null
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer that fits in i64
    Int(i64),
    /// Integer above i64::MAX
    UInt(u64),
    /// Float value (stored as bits)
    Float(u64),
    /// String value
    String(String),
    /// Array value, elements in document order
    Array(Vec<LeafKey>),
    /// Object value nested in an array, fields sorted by name
    Object(Vec<(String, LeafKey)>),
}

impl LeafKey {
    /// Create a key from any JSON value.
    pub fn from_json(value: &Value) -> Self {
        super::grow_stack(|| Self::project(value))
    }

    fn project(value: &Value) -> Self {
        match value {
            Value::Null => LeafKey::Null,
            Value::Bool(b) => LeafKey::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    LeafKey::Int(i)
                } else if let Some(u) = n.as_u64() {
                    LeafKey::UInt(u)
                } else {
                    // Non-integral numbers always have an f64 form without arbitrary_precision
                    LeafKey::Float(n.as_f64().unwrap_or(f64::NAN).to_bits())
                }
            }
            Value::String(s) => LeafKey::String(s.clone()),
            Value::Array(items) => LeafKey::Array(items.iter().map(LeafKey::from_json).collect()),
            Value::Object(fields) => {
                let mut pairs: Vec<(String, LeafKey)> = fields
                    .iter()
                    .map(|(k, v)| (k.clone(), LeafKey::from_json(v)))
                    .collect();
                pairs.sort_by(|a, b| a.0.cmp(&b.0));
                LeafKey::Object(pairs)
            }
        }
    }

    /// Superset test used for array patterns.
    ///
    /// True when `self` is an array holding every element of `pattern`.
    /// Order and multiplicity are ignored; a non-array key never matches.
    pub fn contains_all(&self, pattern: &[LeafKey]) -> bool {
        match self {
            LeafKey::Array(items) => pattern.iter().all(|p| items.contains(p)),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(LeafKey::from_json(&json!(null)), LeafKey::Null);
        assert_eq!(LeafKey::from_json(&json!(true)), LeafKey::Bool(true));
        assert_eq!(LeafKey::from_json(&json!(-3)), LeafKey::Int(-3));
        assert_eq!(
            LeafKey::from_json(&json!("hello")),
            LeafKey::String("hello".to_string())
        );
    }

    #[test]
    fn test_large_unsigned() {
        assert_eq!(
            LeafKey::from_json(&json!(u64::MAX)),
            LeafKey::UInt(u64::MAX)
        );
    }

    #[test]
    fn test_int_and_float_distinct() {
        let int_key = LeafKey::from_json(&serde_json::from_str("1").unwrap());
        let float_key = LeafKey::from_json(&serde_json::from_str("1.0").unwrap());
        assert_ne!(int_key, float_key);
        assert_eq!(float_key, LeafKey::Float(1.0f64.to_bits()));
    }

    #[test]
    fn test_object_field_order_ignored() {
        let a: Value = serde_json::from_str(r#"[{"x":1,"y":2}]"#).unwrap();
        let b: Value = serde_json::from_str(r#"[{"y":2,"x":1}]"#).unwrap();
        assert_eq!(LeafKey::from_json(&a), LeafKey::from_json(&b));
    }

    #[test]
    fn test_array_order_matters_for_equality() {
        assert_ne!(
            LeafKey::from_json(&json!([1, 2])),
            LeafKey::from_json(&json!([2, 1]))
        );
    }

    #[test]
    fn test_contains_all() {
        let stored = LeafKey::from_json(&json!(["x", "y", "z"]));

        let subset = [LeafKey::from_json(&json!("z")), LeafKey::from_json(&json!("x"))];
        assert!(stored.contains_all(&subset));

        let not_subset = [LeafKey::from_json(&json!("x")), LeafKey::from_json(&json!("w"))];
        assert!(!stored.contains_all(&not_subset));

        // Repeated pattern elements need only appear once
        let repeated = [LeafKey::from_json(&json!("y")), LeafKey::from_json(&json!("y"))];
        assert!(stored.contains_all(&repeated));

        assert!(stored.contains_all(&[]));
    }

    #[test]
    fn test_scalar_never_contains() {
        let stored = LeafKey::from_json(&json!("x"));
        assert!(!stored.contains_all(&[LeafKey::from_json(&json!("x"))]));
    }
}
