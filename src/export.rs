//! Two-phase artifact export: validate, then finalize.
//!
//! `validate_for_export` re-checks every mapped path against the current
//! document and reports stale paths as warnings; it never blocks. The
//! caller decides whether to proceed and then calls `build_artifact`, which
//! enforces only the hard preconditions (non-blank name and source
//! processor, at least one mapping).

use indexmap::IndexMap;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::constants::export::{SCAN_ID_PREFIX, SCAN_ID_SUFFIX_LEN};
use crate::errors::MappingError;
use crate::mapping::{MappingTable, MappingValue};
use crate::query;
use crate::schema::SchemaCatalog;
use crate::types::{CanonicalPath, ErrorMessage, ScanId, SchemaKey};
use crate::value::Value;

/// A mapped path that no longer resolves against the current document.
///
/// Non-fatal: export may proceed on operator override.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StalePathWarning {
    /// Schema key the path is mapped to.
    pub key: SchemaKey,
    /// The failing path.
    pub path: CanonicalPath,
    /// Evaluator (or catalog) diagnostic.
    pub error_message: ErrorMessage,
}

/// Scan-id generation capability injected into export.
///
/// Export logic stays deterministic and testable; the production policy
/// lives in [`SystemScanIds`].
pub trait ScanIdGenerator {
    /// Produce a fresh scan identifier, unique per export.
    fn next_scan_id(&self) -> ScanId;
}

/// Production scan-id policy: millisecond timestamp in base 36 plus a
/// random lowercase-alphanumeric suffix, e.g. `scan_mf1x2k9a_q7b3nd`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemScanIds;

impl ScanIdGenerator for SystemScanIds {
    fn next_scan_id(&self) -> ScanId {
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let mut rng = rand::rng();
        let suffix: String = (0..SCAN_ID_SUFFIX_LEN)
            .map(|_| to_base36_digit(rng.random_range(0..36)))
            .collect();
        format!("{SCAN_ID_PREFIX}_{}_{suffix}", to_base36(millis))
    }
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(to_base36_digit((value % 36) as u32));
        value /= 36;
    }
    digits.iter().rev().collect()
}

fn to_base36_digit(digit: u32) -> char {
    char::from_digit(digit, 36).unwrap_or('0')
}

/// The finalized, exported mapping description.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MappingArtifact {
    /// Operator-chosen template name.
    pub name: String,
    /// Source processor the mapped documents come from.
    #[serde(rename = "sourceProcessor")]
    pub source_processor: String,
    /// Opaque per-export scan identifier.
    #[serde(rename = "importFileScanId")]
    pub import_file_scan_id: ScanId,
    /// Schema key to scalar-or-sequence path mapping.
    pub mapping: IndexMap<SchemaKey, MappingValue>,
}

impl MappingArtifact {
    /// Pretty-printed JSON rendering, as persisted/downloaded by the host.
    pub fn to_pretty_json(&self) -> Result<String, MappingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Validates a mapping table against the current document and the schema
/// catalog, then serializes a mapping artifact.
#[derive(Clone, Copy, Debug)]
pub struct MappingExporter<'a> {
    catalog: &'a SchemaCatalog,
}

impl<'a> MappingExporter<'a> {
    /// Build an exporter over `catalog`.
    pub fn new(catalog: &'a SchemaCatalog) -> Self {
        Self { catalog }
    }

    /// Phase one: re-evaluate every mapped path against `document`.
    ///
    /// Returns one warning per path that is malformed, matches nothing in
    /// the current document, or is mapped to a key absent from the catalog.
    pub fn validate_for_export(
        &self,
        table: &MappingTable,
        document: &Value,
    ) -> Vec<StalePathWarning> {
        let mut warnings = Vec::new();
        for (key, value) in table.iter() {
            for path in value.paths() {
                if !self.catalog.contains(key) {
                    warnings.push(StalePathWarning {
                        key: key.clone(),
                        path: path.clone(),
                        error_message: format!("schema key '{key}' is not in the target catalog"),
                    });
                    continue;
                }
                let info = query::path_info(document, path);
                if !info.is_valid {
                    warnings.push(StalePathWarning {
                        key: key.clone(),
                        path: path.clone(),
                        error_message: info
                            .error_message
                            .unwrap_or_else(|| "path expression is invalid".to_string()),
                    });
                } else if info.result_count == 0 {
                    warnings.push(StalePathWarning {
                        key: key.clone(),
                        path: path.clone(),
                        error_message: "path matches nothing in the current document".to_string(),
                    });
                }
            }
        }
        warnings
    }

    /// True iff every mapped path evaluates cleanly against `document`.
    pub fn validate_mapping(&self, table: &MappingTable, document: &Value) -> bool {
        table
            .iter()
            .flat_map(|(_, value)| value.paths())
            .all(|path| query::validate(document, path))
    }

    /// Phase two: finalize the artifact.
    ///
    /// Fails with [`MappingError::MissingRequiredField`] when `name` or
    /// `source_processor` is blank and [`MappingError::EmptyMapping`] when
    /// the table has no entries. Stale paths never block here; callers are
    /// expected to have run [`Self::validate_for_export`] first.
    pub fn build_artifact(
        &self,
        name: &str,
        source_processor: &str,
        table: &MappingTable,
        document: &Value,
        ids: &dyn ScanIdGenerator,
    ) -> Result<MappingArtifact, MappingError> {
        if name.trim().is_empty() {
            return Err(MappingError::MissingRequiredField { field: "name" });
        }
        if source_processor.trim().is_empty() {
            return Err(MappingError::MissingRequiredField {
                field: "sourceProcessor",
            });
        }
        if table.mapped_count() == 0 {
            return Err(MappingError::EmptyMapping);
        }

        let stale = self.validate_for_export(table, document);
        if !stale.is_empty() {
            warn!(
                warnings = stale.len(),
                name, "exporting mapping with stale paths"
            );
        }

        let artifact = MappingArtifact {
            name: name.to_string(),
            source_processor: source_processor.to_string(),
            import_file_scan_id: ids.next_scan_id(),
            mapping: table.export_view(),
        };
        debug!(
            name = %artifact.name,
            scan_id = %artifact.import_file_scan_id,
            entries = artifact.mapping.len(),
            "built mapping artifact"
        );
        Ok(artifact)
    }
}
