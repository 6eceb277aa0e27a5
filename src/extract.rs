//! Leaf-path discovery over an arbitrary document.
//!
//! Extraction is depth-first in object-key insertion order and collapses
//! arrays to their first element under a `[*]` wildcard segment: arrays are
//! assumed homogeneous, and elements after the first are never inspected.
//! Traversal uses an explicit work stack with a configurable depth ceiling
//! so adversarially nested documents fail closed instead of overflowing.

use serde::Serialize;

use crate::config::ExtractorConfig;
use crate::constants::path::{MEMBER_DELIMITER, ROOT_MARKER, WILDCARD};
use crate::errors::MappingError;
use crate::format;
use crate::types::{CanonicalPath, DisplayLabel};
use crate::value::Value;

/// One discovered leaf position with its display label and sample value.
///
/// A leaf is a primitive, a null, an empty array, or an empty object.
/// Entries are unique per extraction pass and ordered deterministically.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SourcePathEntry {
    /// Canonical path that re-evaluates to this position.
    pub path: CanonicalPath,
    /// Human-readable label derived from the path.
    pub display_name: DisplayLabel,
    /// The value observed at this position in the sampled document.
    pub sample_value: Value,
}

/// Walk `document` and return every addressable leaf position.
///
/// Total for any well-formed value; the only failure mode is
/// [`MappingError::DepthExceeded`] when nesting passes `config.max_depth`.
pub fn extract(
    document: &Value,
    config: &ExtractorConfig,
) -> Result<Vec<SourcePathEntry>, MappingError> {
    let mut entries = Vec::new();
    // (path, segment depth, node); children are pushed in reverse so the
    // first object key is processed first.
    let mut pending: Vec<(CanonicalPath, usize, &Value)> =
        vec![(ROOT_MARKER.to_string(), 0, document)];

    while let Some((path, depth, node)) = pending.pop() {
        if depth > config.max_depth {
            return Err(MappingError::DepthExceeded {
                limit: config.max_depth,
            });
        }
        match node {
            Value::Array(items) if !items.is_empty() => {
                pending.push((format!("{path}{WILDCARD}"), depth + 1, &items[0]));
            }
            Value::Object(members) if !members.is_empty() => {
                for (key, member) in members.iter().rev() {
                    pending.push((member_path(&path, key), depth + 1, member));
                }
            }
            leaf => entries.push(SourcePathEntry {
                display_name: format::display_name(&path),
                sample_value: leaf.clone(),
                path,
            }),
        }
    }

    Ok(entries)
}

fn member_path(parent: &str, key: &str) -> CanonicalPath {
    if parent == ROOT_MARKER {
        format!("{ROOT_MARKER}{MEMBER_DELIMITER}{key}")
    } else {
        format!("{parent}{MEMBER_DELIMITER}{key}")
    }
}
