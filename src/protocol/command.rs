//! Line command parsing
//!
//! A line is `<keyword> <document literal>`. The literal is everything after
//! the first space and is kept byte-for-byte for `add`.

use crate::document::{parse_document, DocumentResult, Fields};

/// A parsed protocol command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert a document
    Add { text: String, fields: Fields },
    /// Write every matching document, oldest first
    Get { pattern: Fields },
    /// Remove every matching document
    Delete { pattern: Fields },
    /// Any other keyword; a no-op once the literal has parsed
    Unknown { keyword: String },
}

impl Command {
    /// Keyword this command was parsed from
    pub fn keyword(&self) -> &str {
        match self {
            Command::Add { .. } => "add",
            Command::Get { .. } => "get",
            Command::Delete { .. } => "delete",
            Command::Unknown { keyword } => keyword,
        }
    }
}

/// Parse one input line.
///
/// Returns `Ok(None)` for blank lines. The literal is parsed before the
/// keyword is dispatched, so an unknown keyword with a malformed literal is
/// still a parse failure.
pub fn parse_line(line: &str) -> DocumentResult<Option<Command>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (keyword, literal) = line.split_once(' ').unwrap_or((line, ""));
    let fields = parse_document(literal)?;

    let command = match keyword {
        "add" => Command::Add {
            text: literal.to_string(),
            fields,
        },
        "get" => Command::Get { pattern: fields },
        "delete" => Command::Delete { pattern: fields },
        other => Command::Unknown {
            keyword: other.to_string(),
        },
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentErrorCode;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_parse_add_keeps_text() {
        let cmd = parse_line(r#"add {"a": 1,  "b":[2]}"#).unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                text: r#"{"a": 1,  "b":[2]}"#.to_string(),
                fields: fields(json!({"a": 1, "b": [2]})),
            }
        );
    }

    #[test]
    fn test_parse_get_and_delete() {
        assert_eq!(
            parse_line(r#"get {"a":1}"#).unwrap().unwrap(),
            Command::Get {
                pattern: fields(json!({"a": 1}))
            }
        );
        assert_eq!(
            parse_line("delete {}").unwrap().unwrap(),
            Command::Delete {
                pattern: Fields::new()
            }
        );
    }

    #[test]
    fn test_unknown_keyword() {
        let cmd = parse_line(r#"upsert {"a":1}"#).unwrap().unwrap();
        assert_eq!(cmd.keyword(), "upsert");
        assert!(matches!(cmd, Command::Unknown { .. }));
    }

    #[test]
    fn test_keyword_case_sensitive() {
        let cmd = parse_line("ADD {}").unwrap().unwrap();
        assert!(matches!(cmd, Command::Unknown { .. }));
    }

    #[test]
    fn test_unknown_keyword_still_parses_literal() {
        let err = parse_line("frobnicate {oops").unwrap_err();
        assert_eq!(err.code(), DocumentErrorCode::QbeParseFailed);
    }

    #[test]
    fn test_blank_lines_ignored() {
        assert!(parse_line("").unwrap().is_none());
        assert!(parse_line("   ").unwrap().is_none());
        assert!(parse_line("\r").unwrap().is_none());
    }

    #[test]
    fn test_missing_literal_is_parse_failure() {
        let err = parse_line("get").unwrap_err();
        assert_eq!(err.code(), DocumentErrorCode::QbeParseFailed);
    }

    #[test]
    fn test_trailing_carriage_return_stripped() {
        let cmd = parse_line("add {\"a\":1}\r").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                text: "{\"a\":1}".to_string(),
                fields: fields(json!({"a": 1})),
            }
        );
    }

    #[test]
    fn test_non_object_literal_rejected() {
        assert!(parse_line("add [1,2]").is_err());
        assert!(parse_line("get 7").is_err());
    }
}
