use serde_json::json;

use fieldmap::config::ExtractorConfig;
use fieldmap::extract::{self, SourcePathEntry};
use fieldmap::value::Value;
use fieldmap::{format, query};

/// Nested customer export in the shape produced by Stripe.
fn stripe_document() -> Value {
    Value::from(json!({
        "customers": [{
            "id": "cus_abc123def456",
            "email": "jenny.rosen@example.com",
            "description": "Jenny Rosen",
            "default_source": "card_edf214abc789",
            "metadata": {"color_preference": "turquoise"},
            "cards": [{
                "id": "card_edf214abc789",
                "number": "********4242",
                "name": "Jenny Rosen",
                "exp_month": 1,
                "exp_year": 2020,
                "address_line1": "123 Main St.",
                "address_line2": null,
                "address_city": "Springfield",
                "address_state": "MA",
                "address_zip": "01101",
                "address_country": "US",
            }],
        }],
    }))
}

/// Flat record export with a top-level array, Affinipay style.
fn affinipay_document() -> Value {
    Value::from(json!([{
        "id": "AJWAaN2RQnqprEM3Nc5qNw",
        "created": "2023-01-24T20:57:21.063Z",
        "name": "Clay Hefner",
        "address1": "123 Example St",
        "city": "Hiltonshire",
        "state": "ID",
        "postal_code": "35184",
        "country": "USA",
        "email": "clay@preczn.com",
        "phone": "",
        "number": "********4242",
        "exp_month": 3,
        "exp_year": 2024,
    }]))
}

fn extract_entries(document: &Value) -> Vec<SourcePathEntry> {
    extract::extract(document, &ExtractorConfig::default()).expect("extraction")
}

#[test]
fn extraction_is_idempotent() {
    for document in [stripe_document(), affinipay_document()] {
        assert_eq!(extract_entries(&document), extract_entries(&document));
    }
}

#[test]
fn extracted_paths_are_unique() {
    for document in [stripe_document(), affinipay_document()] {
        let mut paths: Vec<String> = extract_entries(&document)
            .into_iter()
            .map(|entry| entry.path)
            .collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }
}

#[test]
fn every_extracted_path_re_evaluates_non_empty() {
    // Round-trip invariant: each emitted path must resolve against the same
    // document. Null leaves resolve to the null itself, so even those are
    // non-empty matches.
    for document in [stripe_document(), affinipay_document()] {
        for entry in extract_entries(&document) {
            let matches = query::evaluate(&document, &entry.path);
            assert!(!matches.is_empty(), "path {} matched nothing", entry.path);
            assert_eq!(
                matches[0], entry.sample_value,
                "first match for {} should be the sampled value",
                entry.path
            );
        }
    }
}

#[test]
fn stripe_document_yields_the_known_leaf_set() {
    let entries = extract_entries(&stripe_document());
    let paths: Vec<&str> = entries.iter().map(|entry| entry.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "$.customers[*].id",
            "$.customers[*].email",
            "$.customers[*].description",
            "$.customers[*].default_source",
            "$.customers[*].metadata.color_preference",
            "$.customers[*].cards[*].id",
            "$.customers[*].cards[*].number",
            "$.customers[*].cards[*].name",
            "$.customers[*].cards[*].exp_month",
            "$.customers[*].cards[*].exp_year",
            "$.customers[*].cards[*].address_line1",
            "$.customers[*].cards[*].address_line2",
            "$.customers[*].cards[*].address_city",
            "$.customers[*].cards[*].address_state",
            "$.customers[*].cards[*].address_zip",
            "$.customers[*].cards[*].address_country",
        ]
    );
}

#[test]
fn affinipay_document_collapses_the_root_array() {
    let entries = extract_entries(&affinipay_document());
    assert!(entries.iter().all(|entry| entry.path.starts_with("$[*].")));
    assert_eq!(entries.len(), 13);
}

#[test]
fn heterogeneous_arrays_sample_only_the_first_element() {
    // Known fidelity limit: elements after the first are never inspected,
    // so divergent shapes in later elements are silently dropped.
    let document = Value::from(json!({"a": [{"b": 1}, {"c": 2}]}));
    let entries = extract_entries(&document);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "$.a[*].b");
    assert_eq!(entries[0].sample_value, Value::from(json!(1)));
}

#[test]
fn display_names_follow_the_flat_nested_asymmetry() {
    assert_eq!(
        format::display_name("$.customers[*].cards[*].exp_month"),
        "Customers Items > Cards Items > Exp Month"
    );
    assert_eq!(format::display_name("$.country"), "country");
}

#[test]
fn entries_carry_formatted_display_names() {
    let entries = extract_entries(&stripe_document());
    let exp_month = entries
        .iter()
        .find(|entry| entry.path == "$.customers[*].cards[*].exp_month")
        .expect("exp_month entry");
    assert_eq!(
        exp_month.display_name,
        "Customers Items > Cards Items > Exp Month"
    );

    let flat = extract_entries(&Value::from(json!({"country": "US"})));
    assert_eq!(flat[0].display_name, "country");
}

#[test]
fn null_leaves_round_trip_to_null() {
    let document = stripe_document();
    let matches = query::evaluate(&document, "$.customers[*].cards[*].address_line2");
    assert_eq!(matches, vec![Value::Null]);
}
