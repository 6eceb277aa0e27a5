#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Extractor configuration types.
pub mod config;
/// Centralized constants used across extraction, formatting, and export.
pub mod constants;
/// Artifact export and scan-id generation.
pub mod export;
/// Leaf-path extraction over arbitrary documents.
pub mod extract;
/// Display formatting for paths and sample values.
pub mod format;
/// Mapping table between schema keys and source paths.
pub mod mapping;
/// Canonical path-query evaluation and validation.
pub mod query;
/// Target schema catalog and grouped ordering.
pub mod schema;
/// Host-facing session owning the document and mapping state.
pub mod session;
/// Shared type aliases.
pub mod types;
/// Decoded JSON value model.
pub mod value;

mod errors;

pub use config::ExtractorConfig;
pub use errors::MappingError;
pub use export::{MappingArtifact, MappingExporter, ScanIdGenerator, StalePathWarning, SystemScanIds};
pub use extract::SourcePathEntry;
pub use mapping::{MappingTable, MappingValue};
pub use query::PathInfo;
pub use schema::{SchemaCatalog, SchemaField, SchemaGroup, SchemaOption};
pub use session::MappingSession;
pub use types::{CanonicalPath, SchemaKey};
pub use value::Value;
