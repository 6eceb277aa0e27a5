use serde_json::json;

use fieldmap::config::ExtractorConfig;
use fieldmap::schema::{SchemaCatalog, SchemaField};
use fieldmap::session::MappingSession;
use fieldmap::value::Value;
use fieldmap::MappingError;

fn document_v1() -> Value {
    Value::from(json!({"customers": [{"email": "jenny@example.com"}]}))
}

fn document_v2() -> Value {
    Value::from(json!({"records": [{"contact": "clay@example.com"}]}))
}

#[test]
fn document_replacement_invalidates_paths_and_mappings() {
    let mut session = MappingSession::new();
    session.replace_document(document_v1()).expect("replace");
    session.table_mut().set("email", "$.customers[*].email");

    session.replace_document(document_v2()).expect("replace");
    assert!(session.table().is_empty());
    let paths: Vec<&str> = session
        .entries()
        .iter()
        .map(|entry| entry.path.as_str())
        .collect();
    assert_eq!(paths, vec!["$.records[*].contact"]);
}

#[test]
fn rapid_repeated_notifications_are_safe() {
    // The host may deliver change notifications in quick succession; the
    // reaction is a pure function of the current document, so replaying it
    // must not corrupt anything.
    let mut session = MappingSession::new();
    for _ in 0..5 {
        session.replace_document(document_v1()).expect("replace");
    }
    let entries_after_replaces = session.entries().to_vec();
    for _ in 0..5 {
        session.resync().expect("resync");
    }
    assert_eq!(session.entries(), entries_after_replaces.as_slice());
    assert_eq!(session.leaf_count(), 1);
}

#[test]
fn catalog_lifecycle_is_independent_of_the_document() {
    let mut session = MappingSession::new();
    let mut catalog = SchemaCatalog::token_import();
    session.replace_document(document_v1()).expect("replace");

    catalog.add(SchemaField::new("phone", "Phone", "Billing Information", "Phone"));
    session.replace_document(document_v2()).expect("replace");

    // Document churn must not touch the catalog.
    assert!(catalog.contains("phone"));
    assert_eq!(catalog.list().len(), 18);
}

#[test]
fn depth_guard_aborts_without_corrupting_state() {
    let mut session = MappingSession::with_config(ExtractorConfig { max_depth: 3 });
    session.replace_document(document_v1()).expect("replace");
    session.table_mut().set("email", "$.customers[*].email");

    let hostile = Value::from(json!({"a": {"b": {"c": {"d": {"e": 1}}}}}));
    let result = session.replace_document(hostile);
    assert!(matches!(result, Err(MappingError::DepthExceeded { limit: 3 })));

    // Previous document, entries, and mappings are all intact.
    assert_eq!(session.document(), &document_v1());
    assert_eq!(session.leaf_count(), 1);
    assert_eq!(session.table().mapped_count(), 1);

    // And the session still works after the aborted replace.
    session.replace_document(document_v2()).expect("replace");
    assert_eq!(session.leaf_count(), 1);
}

#[test]
fn sample_lookup_reflects_the_current_document() {
    let mut session = MappingSession::new();
    session.replace_document(document_v1()).expect("replace");
    assert_eq!(
        session.sample_for_path("$.customers[*].email"),
        Some(Value::from(json!("jenny@example.com")))
    );

    session.replace_document(document_v2()).expect("replace");
    assert_eq!(session.sample_for_path("$.customers[*].email"), None);
    assert_eq!(
        session.sample_for_path("$.records[*].contact"),
        Some(Value::from(json!("clay@example.com")))
    );
}

#[test]
fn document_pretty_renders_the_stored_value() {
    let mut session = MappingSession::new();
    session.replace_document(document_v1()).expect("replace");
    let rendered = session.document_pretty().expect("pretty");
    let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("parse");
    assert_eq!(parsed, json!({"customers": [{"email": "jenny@example.com"}]}));
}
