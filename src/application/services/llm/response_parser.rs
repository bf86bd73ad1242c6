//! Lenient extraction of JSON fragments from free-text LLM replies
//!
//! Replies usually wrap the requested JSON in prose or code fences. The
//! scanner tries every opening bracket in turn and keeps the first
//! fragment that parses as a complete JSON value.

use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIssue {
    #[error("no JSON {0} found in response")]
    NoJsonFound(&'static str),
    #[error("malformed JSON in response: {0}")]
    Malformed(String),
}

/// First JSON array embedded in the text
pub fn extract_array(text: &str) -> Result<Vec<Value>, ParseIssue> {
    match extract_value(text, '[', "array")? {
        Value::Array(items) => Ok(items),
        other => Err(ParseIssue::Malformed(format!("expected array, got {}", other))),
    }
}

/// First JSON object embedded in the text
pub fn extract_object(text: &str) -> Result<serde_json::Map<String, Value>, ParseIssue> {
    match extract_value(text, '{', "object")? {
        Value::Object(map) => Ok(map),
        other => Err(ParseIssue::Malformed(format!("expected object, got {}", other))),
    }
}

/// First JSON array embedded in the text, deserialized element by element.
/// Elements that do not fit `T` are dropped; an array where none fit is malformed.
pub fn extract_array_of<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, ParseIssue> {
    let items = extract_array(text)?;
    let total = items.len();
    let parsed: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if parsed.is_empty() && total > 0 {
        return Err(ParseIssue::Malformed(
            "array contained no usable entries".to_string(),
        ));
    }
    Ok(parsed)
}

fn extract_value(text: &str, open: char, kind: &'static str) -> Result<Value, ParseIssue> {
    let mut last_error = None;

    for (start, _) in text.match_indices(open) {
        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value)) => return Ok(value),
            Some(Err(e)) => last_error = Some(e.to_string()),
            None => {}
        }
    }

    match last_error {
        Some(message) => Err(ParseIssue::Malformed(message)),
        None => Err(ParseIssue::NoJsonFound(kind)),
    }
}

// ============================================================================
// Field accessors for loosely-typed LLM objects
// ============================================================================

/// String field. Non-string scalars are rendered as text, null counts as absent.
pub fn text_field(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Integer field, accepting numbers and numeric strings
pub fn int_field(map: &serde_json::Map<String, Value>, key: &str) -> Option<i64> {
    match map.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Array of strings. Non-string entries are skipped.
pub fn string_list(map: &serde_json::Map<String, Value>, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
