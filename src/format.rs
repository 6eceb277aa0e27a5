//! Display formatting for canonical paths and sample values.

use crate::constants::format::{ITEMS_SUFFIX, SEGMENT_SEPARATOR};
use crate::constants::path::{ROOT_MARKER, WILDCARD};
use crate::types::DisplayLabel;
use crate::value::Value;

/// Convert a canonical path into a human-readable label.
///
/// Flat fields keep their original casing (`$.country` -> `country`) while
/// nested paths are title-cased per segment and joined with `" > "`, with
/// `[*]` rendered as `" Items"`. The asymmetry is intentional: flat
/// documents show their field names verbatim in selection lists.
pub fn display_name(path: &str) -> DisplayLabel {
    let trimmed = path
        .strip_prefix(ROOT_MARKER)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(path);

    if !trimmed.contains('.') && !trimmed.contains('[') {
        return trimmed.to_string();
    }

    split_outside_brackets(trimmed)
        .into_iter()
        .map(format_segment)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Render a sample value for display next to a source path.
///
/// Strings are quoted, null stays `null`, scalars render bare, and
/// containers fall back to compact JSON.
pub fn format_sample(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => format!("\"{text}\""),
        container => {
            serde_json::to_string(container).unwrap_or_else(|_| container.type_name().to_string())
        }
    }
}

/// Split on dots that are not inside `[...]` brackets.
fn split_outside_brackets(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_brackets = false;
    for (idx, ch) in text.char_indices() {
        match ch {
            '[' => in_brackets = true,
            ']' => in_brackets = false,
            '.' if !in_brackets => {
                parts.push(&text[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

fn format_segment(segment: &str) -> String {
    if segment.contains(WILDCARD) {
        return segment.replace(WILDCARD, ITEMS_SUFFIX);
    }
    segment
        .split('_')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
