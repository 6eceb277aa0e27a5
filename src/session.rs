//! Host-facing mapping session.
//!
//! The host owns notification wiring (document-changed / catalog-changed
//! events); the session only exposes the reactions. Replacing the document
//! is atomic with respect to the table clear that follows it: extraction
//! runs first, and a depth-guard failure leaves the previous document,
//! entries, and table untouched. Re-sync is a pure function of the current
//! document, so delivering it repeatedly or out of order cannot corrupt
//! state.

use tracing::debug;

use crate::config::ExtractorConfig;
use crate::errors::MappingError;
use crate::extract::{self, SourcePathEntry};
use crate::mapping::MappingTable;
use crate::query;
use crate::value::Value;

/// Exclusive owner of the current document, its extracted leaf paths, and
/// the in-progress mapping table.
#[derive(Clone, Debug)]
pub struct MappingSession {
    config: ExtractorConfig,
    document: Value,
    entries: Vec<SourcePathEntry>,
    table: MappingTable,
}

impl Default for MappingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingSession {
    /// Create a session with no document yet (a null document, no entries).
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create a session with an explicit extractor configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            config,
            document: Value::Null,
            entries: Vec::new(),
            table: MappingTable::new(),
        }
    }

    /// Atomically replace the document: re-extract paths and clear the
    /// mapping table. Stale paths cannot be trusted against a new shape.
    ///
    /// On [`MappingError::DepthExceeded`] the session keeps its previous
    /// document, entries, and table.
    pub fn replace_document(&mut self, document: Value) -> Result<(), MappingError> {
        let entries = extract::extract(&document, &self.config)?;
        debug!(leaves = entries.len(), "document replaced");
        self.document = document;
        self.entries = entries;
        self.table.clear();
        Ok(())
    }

    /// Re-extract paths from the current document.
    ///
    /// Idempotent: extraction is a pure function of the document, so
    /// calling this any number of times yields the same entry sequence.
    /// The mapping table is untouched because the document shape did not
    /// change.
    pub fn resync(&mut self) -> Result<(), MappingError> {
        self.entries = extract::extract(&self.document, &self.config)?;
        Ok(())
    }

    /// Discard all mappings without touching the document.
    pub fn reset_mappings(&mut self) {
        self.table.clear();
    }

    /// The current document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Extracted leaf entries in traversal order.
    pub fn entries(&self) -> &[SourcePathEntry] {
        &self.entries
    }

    /// Number of discovered leaf positions.
    pub fn leaf_count(&self) -> usize {
        self.entries.len()
    }

    /// The in-progress mapping table.
    pub fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Mutable access to the mapping table.
    pub fn table_mut(&mut self) -> &mut MappingTable {
        &mut self.table
    }

    /// Sample value for `path`: the precomputed extraction sample when the
    /// path was discovered, otherwise the first live query match.
    pub fn sample_for_path(&self, path: &str) -> Option<Value> {
        if let Some(entry) = self.entries.iter().find(|entry| entry.path == path) {
            return Some(entry.sample_value.clone());
        }
        query::evaluate(&self.document, path).into_iter().next()
    }

    /// Pretty-printed rendering of the current document.
    pub fn document_pretty(&self) -> Result<String, MappingError> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }
}
