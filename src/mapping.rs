//! The in-progress mapping table between schema keys and source paths.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{CanonicalPath, SchemaKey};

/// One or more source paths assigned to a schema key.
///
/// Sequence order is meaningful: downstream processors apply their
/// concatenation policy in the order paths were entered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MappingValue {
    /// Exactly one source path.
    Single(CanonicalPath),
    /// An ordered sequence of source paths.
    Many(Vec<CanonicalPath>),
}

impl MappingValue {
    /// True for blank strings and empty sequences, which the table treats
    /// as removals.
    pub fn is_blank(&self) -> bool {
        match self {
            MappingValue::Single(path) => path.trim().is_empty(),
            MappingValue::Many(paths) => paths.is_empty(),
        }
    }

    /// Iterate over every path in this value.
    pub fn paths(&self) -> impl Iterator<Item = &CanonicalPath> {
        match self {
            MappingValue::Single(path) => std::slice::from_ref(path).iter(),
            MappingValue::Many(paths) => paths.iter(),
        }
    }

    /// Single-element sequences collapse to a scalar in the export view.
    fn collapsed(&self) -> MappingValue {
        match self {
            MappingValue::Many(paths) if paths.len() == 1 => {
                MappingValue::Single(paths[0].clone())
            }
            other => other.clone(),
        }
    }
}

impl From<&str> for MappingValue {
    fn from(path: &str) -> Self {
        MappingValue::Single(path.to_string())
    }
}

impl From<String> for MappingValue {
    fn from(path: String) -> Self {
        MappingValue::Single(path)
    }
}

impl From<Vec<String>> for MappingValue {
    fn from(paths: Vec<String>) -> Self {
        MappingValue::Many(paths)
    }
}

impl From<Vec<&str>> for MappingValue {
    fn from(paths: Vec<&str>) -> Self {
        MappingValue::Many(paths.into_iter().map(str::to_string).collect())
    }
}

/// Association between target schema keys and source canonical paths.
///
/// Invariant: a key is present iff its value is non-blank (scalar case) or
/// non-empty (sequence case); writing a blank value removes the key.
#[derive(Clone, Debug, Default)]
pub struct MappingTable {
    entries: IndexMap<SchemaKey, MappingValue>,
}

impl MappingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `key`; blank values remove the key instead.
    pub fn set(&mut self, key: impl Into<SchemaKey>, value: impl Into<MappingValue>) {
        let key = key.into();
        let value = value.into();
        if value.is_blank() {
            self.entries.shift_remove(&key);
        } else {
            self.entries.insert(key, value);
        }
    }

    /// Current value for `key`, if mapped.
    pub fn get(&self, key: &str) -> Option<&MappingValue> {
        self.entries.get(key)
    }

    /// Remove `key`, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<MappingValue> {
        self.entries.shift_remove(key)
    }

    /// Discard every entry (document replacement or explicit reset).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of keys currently satisfying the non-blank invariant.
    pub fn mapped_count(&self) -> usize {
        self.entries.len()
    }

    /// True when no key is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SchemaKey, &MappingValue)> {
        self.entries.iter()
    }

    /// Snapshot for export: single-element sequences collapse to scalars,
    /// multi-element sequences keep their exact order.
    pub fn export_view(&self) -> IndexMap<SchemaKey, MappingValue> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.collapsed()))
            .collect()
    }
}
