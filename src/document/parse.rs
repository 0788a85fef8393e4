//! Document literal parsing
//!
//! A document literal must be a JSON object. Anything else, including
//! well-formed JSON scalars or arrays, is rejected with QBE_PARSE_FAILED.
//!
//! Nesting depth is not capped. The parser grows its stack on demand instead
//! of enforcing serde_json's default recursion limit.

use serde::Deserialize;
use serde_json::Value;

use super::errors::{DocumentError, DocumentResult};
use super::types::Fields;

/// Parse a document literal into its top-level field map.
pub fn parse_document(text: &str) -> DocumentResult<Fields> {
    if text.trim().is_empty() {
        return Err(DocumentError::parse_failed("Missing document literal"));
    }

    match parse_value(text)? {
        Value::Object(fields) => Ok(fields),
        other => Err(DocumentError::parse_failed(format!(
            "Document literal must be a JSON object, found {}",
            kind_of(&other)
        ))),
    }
}

fn parse_value(text: &str) -> DocumentResult<Value> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
