//! Canonical path-query evaluation and validation.
//!
//! The evaluator never propagates a fault to its caller: malformed
//! expressions are caught during parsing and converted into a diagnostic
//! [`PathInfo`] (or an empty result set for [`evaluate`]). The core only
//! ever generates expressions in the canonical grammar (`$`, `.key`,
//! `[*]`), but hosts may feed arbitrary strings through the same entry
//! points, so tolerance without panics is part of the contract. A numeric
//! index form `[n]` is accepted for hand-written expressions.

use serde::Serialize;

use crate::constants::path::ROOT_MARKER;
use crate::constants::query::SAMPLE_RESULT_LIMIT;
use crate::types::ErrorMessage;
use crate::value::Value;

/// Diagnostic summary for one path expression against one document.
#[derive(Clone, Debug, Serialize)]
pub struct PathInfo {
    /// True iff the expression parsed and evaluated without fault,
    /// independent of how many values matched.
    pub is_valid: bool,
    /// Number of matched values.
    pub result_count: usize,
    /// Up to the first three matched values.
    pub sample_results: Vec<Value>,
    /// Parse/evaluation fault description when `is_valid` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<ErrorMessage>,
}

/// One parsed step of a path expression.
enum Segment {
    Member(String),
    Wildcard,
    Index(usize),
}

/// Evaluate `expression` against `document`, returning all matches.
///
/// Never fails: malformed expressions evaluate to an empty result set.
/// `[*]` matches every element of an array, so a path the extractor
/// produced from a first-element sample can match more than one value here.
pub fn evaluate(document: &Value, expression: &str) -> Vec<Value> {
    match parse(expression) {
        Ok(segments) => resolve(document, &segments)
            .into_iter()
            .cloned()
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// True iff `expression` evaluates without fault against `document`.
///
/// Zero matches is still valid; only grammar faults invalidate.
pub fn validate(document: &Value, expression: &str) -> bool {
    path_info(document, expression).is_valid
}

/// Evaluate with diagnostics: validity, match count, and sample matches.
pub fn path_info(document: &Value, expression: &str) -> PathInfo {
    match parse(expression) {
        Ok(segments) => {
            let matches = resolve(document, &segments);
            PathInfo {
                is_valid: true,
                result_count: matches.len(),
                sample_results: matches
                    .into_iter()
                    .take(SAMPLE_RESULT_LIMIT)
                    .cloned()
                    .collect(),
                error_message: None,
            }
        }
        Err(message) => PathInfo {
            is_valid: false,
            result_count: 0,
            sample_results: Vec::new(),
            error_message: Some(message),
        },
    }
}

fn parse(expression: &str) -> Result<Vec<Segment>, ErrorMessage> {
    let rest = expression
        .strip_prefix(ROOT_MARKER)
        .ok_or_else(|| format!("expression must start with '{ROOT_MARKER}'"))?;

    let chars: Vec<char> = rest.chars().collect();
    let mut segments = Vec::new();
    let mut idx = 0;

    while idx < chars.len() {
        match chars[idx] {
            '.' => {
                idx += 1;
                let start = idx;
                while idx < chars.len() && chars[idx] != '.' && chars[idx] != '[' {
                    idx += 1;
                }
                if start == idx {
                    return Err(format!("empty member name at position {start}"));
                }
                segments.push(Segment::Member(chars[start..idx].iter().collect()));
            }
            '[' => {
                idx += 1;
                let start = idx;
                while idx < chars.len() && chars[idx] != ']' {
                    idx += 1;
                }
                if idx == chars.len() {
                    return Err(format!("unterminated bracket at position {start}"));
                }
                let inner: String = chars[start..idx].iter().collect();
                idx += 1;
                if inner == "*" {
                    segments.push(Segment::Wildcard);
                } else {
                    let index = inner
                        .parse::<usize>()
                        .map_err(|_| format!("unsupported index expression '[{inner}]'"))?;
                    segments.push(Segment::Index(index));
                }
            }
            other => {
                return Err(format!("unexpected character '{other}' at position {idx}"));
            }
        }
    }

    Ok(segments)
}

fn resolve<'doc>(document: &'doc Value, segments: &[Segment]) -> Vec<&'doc Value> {
    let mut frontier = vec![document];
    for segment in segments {
        let mut next = Vec::new();
        for node in frontier {
            match (segment, node) {
                (Segment::Member(key), Value::Object(members)) => {
                    if let Some(member) = members.get(key) {
                        next.push(member);
                    }
                }
                (Segment::Wildcard, Value::Array(items)) => next.extend(items.iter()),
                (Segment::Index(index), Value::Array(items)) => {
                    if let Some(item) = items.get(*index) {
                        next.push(item);
                    }
                }
                _ => {}
            }
        }
        frontier = next;
    }
    frontier
}
