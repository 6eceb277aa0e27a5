/// Constants used by the canonical path grammar.
pub mod path {
    /// Root marker that begins every canonical path.
    pub const ROOT_MARKER: &str = "$";
    /// Wildcard segment addressing the first (representative) array element.
    pub const WILDCARD: &str = "[*]";
    /// Delimiter between an object path and a member key.
    pub const MEMBER_DELIMITER: char = '.';
}

/// Constants used by leaf-path extraction.
pub mod extract {
    /// Default ceiling on document nesting before extraction fails closed.
    pub const DEFAULT_MAX_DEPTH: usize = 1000;
}

/// Constants used by path display-name formatting.
pub mod format {
    /// Replacement text rendered for a `[*]` wildcard segment.
    pub const ITEMS_SUFFIX: &str = " Items";
    /// Separator between formatted path segments.
    pub const SEGMENT_SEPARATOR: &str = " > ";
}

/// Constants used by path-query diagnostics.
pub mod query {
    /// Number of matched values returned as samples in `PathInfo`.
    pub const SAMPLE_RESULT_LIMIT: usize = 3;
}

/// Constants used by schema catalog grouping and ordering.
pub mod schema {
    /// Groups emitted first, in this exact order, when present in the catalog.
    pub const GROUP_PRIORITY: [&str; 4] = ["Source IDs", "Card", "ACH", "Billing Information"];
    /// Group whose fields follow a fixed order instead of alphabetical labels.
    pub const BILLING_GROUP: &str = "Billing Information";
    /// Fixed field order for the billing group; stragglers keep catalog order.
    pub const BILLING_FIELD_ORDER: [&str; 9] = [
        "firstName",
        "lastName",
        "email",
        "address",
        "address2",
        "city",
        "region",
        "postal",
        "country",
    ];
}

/// Constants used by artifact export and scan-id generation.
pub mod export {
    /// Prefix applied to every generated scan identifier.
    pub const SCAN_ID_PREFIX: &str = "scan";
    /// Length of the random suffix appended to generated scan identifiers.
    pub const SCAN_ID_SUFFIX_LEN: usize = 6;
}
