use thiserror::Error;

/// Error type for extraction limits, export preconditions, and serialization failures.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("document nesting exceeds the depth limit of {limit}")]
    DepthExceeded { limit: usize },
    #[error("required field '{field}' must not be blank")]
    MissingRequiredField { field: &'static str },
    #[error("mapping table has no configured entries")]
    EmptyMapping,
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
