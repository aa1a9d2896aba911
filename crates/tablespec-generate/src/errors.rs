use thiserror::Error;

use tablespec_core::TypeMappingError;

/// Errors emitted by the schema generators.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The document projection is missing a required field.
    #[error("document is missing required field `{field}`")]
    MissingField { field: &'static str },
    /// A type mapping failed for a specific column.
    #[error("column `{column}`: {source}")]
    Mapping {
        column: String,
        source: TypeMappingError,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
