//! Target schema catalog and its deterministic grouped ordering.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::schema::{BILLING_FIELD_ORDER, BILLING_GROUP, GROUP_PRIORITY};
use crate::types::{DisplayLabel, GroupName, SchemaKey};

/// One named target slot in the fixed destination schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Unique, stable identifier used as the mapping-table key.
    pub key: SchemaKey,
    /// Display label.
    pub label: DisplayLabel,
    /// Category this field belongs to.
    pub group: GroupName,
    /// Optional operator-facing description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SchemaField {
    /// Convenience constructor for catalog construction.
    pub fn new(
        key: impl Into<SchemaKey>,
        label: impl Into<DisplayLabel>,
        group: impl Into<GroupName>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            group: group.into(),
            description: Some(description.into()),
        }
    }
}

/// A named group of schema fields in display order.
///
/// Derived, never stored: recomputed deterministically from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchemaGroup {
    /// Group name.
    pub name: GroupName,
    /// Fields in display order.
    pub fields: Vec<SchemaField>,
}

/// Flat label/key pair for selection lists.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SchemaOption {
    /// Display label.
    pub label: DisplayLabel,
    /// Mapping-table key.
    pub key: SchemaKey,
}

/// Holds target-field definitions; append/update/remove only through this
/// interface. The catalog has its own lifecycle and is never invalidated by
/// document changes.
#[derive(Clone, Debug, Default)]
pub struct SchemaCatalog {
    fields: Vec<SchemaField>,
}

impl SchemaCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard token-import target schema: source identifiers, card
    /// data, ACH data, and billing information.
    pub fn token_import() -> Self {
        let fields = vec![
            SchemaField::new("token", "Token", "Source IDs", "Payment token identifier"),
            SchemaField::new(
                "customerId",
                "Customer ID",
                "Source IDs",
                "Customer identifier associated with the token",
            ),
            SchemaField::new("number", "Card Number", "Card", "Card number"),
            SchemaField::new("expiration", "Expiration", "Card", "Card expiration date"),
            SchemaField::new("account", "Account Number", "ACH", "Bank account number"),
            SchemaField::new("routing", "Routing Number", "ACH", "Bank routing number"),
            SchemaField::new(
                "accountType",
                "Account Type",
                "ACH",
                "Type of bank account (checking/savings)",
            ),
            SchemaField::new("bankCountry", "Bank Country", "ACH", "Country of the bank"),
            SchemaField::new(
                "firstName",
                "First Name",
                "Billing Information",
                "Cardholder first name",
            ),
            SchemaField::new(
                "lastName",
                "Last Name",
                "Billing Information",
                "Cardholder last name",
            ),
            SchemaField::new(
                "email",
                "Email",
                "Billing Information",
                "Cardholder email address",
            ),
            SchemaField::new(
                "address",
                "Address Line",
                "Billing Information",
                "Primary address line",
            ),
            SchemaField::new(
                "address2",
                "Address Line 2",
                "Billing Information",
                "Secondary address line (optional)",
            ),
            SchemaField::new("city", "City", "Billing Information", "City name"),
            SchemaField::new(
                "region",
                "Region",
                "Billing Information",
                "State/Province/Region",
            ),
            SchemaField::new(
                "postal",
                "Postal Code",
                "Billing Information",
                "ZIP/Postal code",
            ),
            SchemaField::new(
                "country",
                "Country",
                "Billing Information",
                "Country name or code",
            ),
        ];
        Self { fields }
    }

    /// Catalog fields in insertion order.
    pub fn list(&self) -> &[SchemaField] {
        &self.fields
    }

    /// True when `key` names a catalog field.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|field| field.key == key)
    }

    /// Flat label/key options in catalog order (for selection lists).
    pub fn options(&self) -> Vec<SchemaOption> {
        self.fields
            .iter()
            .map(|field| SchemaOption {
                label: field.label.clone(),
                key: field.key.clone(),
            })
            .collect()
    }

    /// Append a field. Replaces any existing field with the same key so
    /// keys stay unique.
    pub fn add(&mut self, field: SchemaField) {
        self.remove(&field.key);
        self.fields.push(field);
    }

    /// Replace the field whose key matches; returns false when absent.
    pub fn update(&mut self, field: SchemaField) -> bool {
        match self.fields.iter_mut().find(|existing| existing.key == field.key) {
            Some(existing) => {
                *existing = field;
                true
            }
            None => false,
        }
    }

    /// Remove the field with `key`; returns false when absent.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|field| field.key != key);
        self.fields.len() != before
    }

    /// Deterministic grouped ordering.
    ///
    /// Priority groups (`Source IDs`, `Card`, `ACH`, `Billing Information`)
    /// come first in that fixed order when present. Billing Information uses
    /// a fixed field order with stragglers appended in catalog order; every
    /// other group sorts fields alphabetically by label. Remaining groups
    /// follow, sorted alphabetically by name.
    pub fn grouped_view(&self) -> Vec<SchemaGroup> {
        let mut buckets: IndexMap<GroupName, Vec<SchemaField>> = IndexMap::new();
        for field in &self.fields {
            buckets
                .entry(field.group.clone())
                .or_default()
                .push(field.clone());
        }

        let mut groups = Vec::new();
        for name in GROUP_PRIORITY {
            if let Some(fields) = buckets.shift_remove(name) {
                groups.push(SchemaGroup {
                    name: name.to_string(),
                    fields: order_group_fields(name, fields),
                });
            }
        }

        let mut remaining: Vec<SchemaGroup> = buckets
            .into_iter()
            .map(|(name, fields)| {
                let fields = order_group_fields(&name, fields);
                SchemaGroup { name, fields }
            })
            .collect();
        remaining.sort_by(|a, b| a.name.cmp(&b.name));
        groups.extend(remaining);
        groups
    }
}

fn order_group_fields(group: &str, mut fields: Vec<SchemaField>) -> Vec<SchemaField> {
    if group == BILLING_GROUP {
        let mut ordered = Vec::with_capacity(fields.len());
        for key in BILLING_FIELD_ORDER {
            if let Some(position) = fields.iter().position(|field| field.key == key) {
                ordered.push(fields.remove(position));
            }
        }
        // Stragglers outside the fixed order keep their catalog order.
        ordered.extend(fields);
        ordered
    } else {
        fields.sort_by(|a, b| a.label.cmp(&b.label));
        fields
    }
}
