use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

/// Delimiters accepted for free-text list input: newlines, bullet points,
/// commas, semicolons and hyphens. Callers sending comma- or bullet-separated
/// text rely on exactly this set.
static LIST_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n|\u{2022}|,|;|-").expect("list delimiter regex"));

/// Greedy first-to-last brace span, with `.` matching newlines.
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("json object regex"));

/// Coerces a loosely-shaped value into an ordered list of non-empty trimmed
/// strings. Arrays keep their string elements in order, strings are split on
/// the shared delimiter set, anything else yields an empty list.
pub fn normalize_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Vec::new();
            }
            LIST_SPLIT
                .split(text)
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Recovers a JSON object from raw model output. The text is not guaranteed
/// to be clean JSON: it may be wrapped in prose or code fences. Tries the
/// whole trimmed text first, then the first balanced-looking `{...}` span.
/// Anything unrecoverable degrades to an empty object; this never fails.
pub fn extract_json_object(raw: &str) -> Value {
    let raw = raw.trim();
    if raw.is_empty() {
        return Value::Object(Map::new());
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(value) if value.is_object() => value,
        _ => JSON_OBJECT
            .find(raw)
            .and_then(|span| serde_json::from_str::<Value>(span.as_str()).ok())
            .filter(|value| value.is_object())
            .unwrap_or_else(|| Value::Object(Map::new())),
    }
}
