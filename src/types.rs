/// Canonical path expression addressing one position in a document.
/// Example: `$.customers[*].cards[*].exp_month`
pub type CanonicalPath = String;
/// Stable identifier for a target schema field.
/// Examples: `token`, `customerId`, `postal`
pub type SchemaKey = String;
/// Display label for a schema field or source path.
/// Examples: `Card Number`, `Customers Items > Cards Items > Exp Month`
pub type DisplayLabel = String;
/// Category name grouping related schema fields.
/// Examples: `Source IDs`, `Card`, `ACH`, `Billing Information`
pub type GroupName = String;
/// Human-readable message attached to caught evaluator faults and warnings.
/// Example: `unexpected character '!' at position 4`
pub type ErrorMessage = String;
/// Opaque scan identifier stamped into exported artifacts.
/// Example: `scan_mf1x2k9a_q7b3nd`
pub type ScanId = String;
