//! Suggestion response body parsing
//!
//! The suggest endpoint answers either with a bare array or with an object
//! carrying a `sugerencias` array. Items are plain strings or objects with a
//! `label` and an optional `value`.

use serde_json::Value;

use super::types::{Suggestion, SuggestionList};

const WRAPPER_FIELD: &str = "sugerencias";

/// Parse a response body into suggestions.
///
/// Any shape other than the two accepted ones yields an empty list, as do
/// items without a usable label.
pub fn parse_suggestions(body: &Value) -> SuggestionList {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(map) => match map.get(WRAPPER_FIELD) {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items.iter().filter_map(parse_item).collect()
}

fn parse_item(item: &Value) -> Option<Suggestion> {
    match item {
        Value::String(label) => non_blank(label).map(Suggestion::new),
        Value::Object(map) => {
            let label = map.get("label").and_then(scalar_text)?;
            let suggestion = Suggestion::new(label);
            match map.get("value").and_then(scalar_text) {
                Some(value) if value != suggestion.label => Some(suggestion.with_value(value)),
                _ => Some(suggestion),
            }
        }
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_blank(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
