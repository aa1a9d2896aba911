use thiserror::Error;

/// Core error type shared across tablespec crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The table name fails the identifier convention.
    #[error("invalid table name `{name}`: {reason}")]
    InvalidTableName { name: String, reason: String },
    /// A column name fails the identifier convention.
    #[error("invalid column name `{name}`: {reason}")]
    InvalidColumnName { name: String, reason: String },
    /// Two columns share a name (compared ignoring ASCII case).
    #[error("duplicate column name: {name}")]
    DuplicateColumn { name: String },
    /// A type-dependent modifier is missing for a column.
    #[error("column `{column}`: {data_type} requires `{modifier}`")]
    MissingModifier {
        column: String,
        data_type: &'static str,
        modifier: &'static str,
    },
    /// A modifier is present on a type that does not accept it.
    #[error("column `{column}`: `{modifier}` is not valid for {data_type}")]
    UnexpectedModifier {
        column: String,
        data_type: &'static str,
        modifier: &'static str,
    },
    /// DECIMAL scale exceeds its precision.
    #[error("column `{column}`: scale {scale} exceeds precision {precision}")]
    ScaleExceedsPrecision {
        column: String,
        scale: u32,
        precision: u32,
    },
    /// Version is not in MAJOR.MINOR digit form.
    #[error("invalid version format: {version}")]
    InvalidVersion { version: String },
    /// The document defines no columns.
    #[error("document must define at least one column")]
    EmptyColumns,
    /// A relationship confidence score falls outside [0, 1].
    #[error("relationship on `{column}`: confidence {confidence} outside [0, 1]")]
    InvalidConfidence { column: String, confidence: f64 },
    /// YAML syntax or shape error from the persistence layer.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON conversion error from the projection boundary.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Filesystem error from the persistence layer.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the type mapping table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeMappingError {
    /// The type token is not one of the nine UMF data types.
    #[error("unknown data type: {name}")]
    UnknownType { name: String },
    /// A mapping was invoked without a modifier the type requires.
    #[error("{data_type} mapping requires `{modifier}`")]
    MissingModifier {
        data_type: &'static str,
        modifier: &'static str,
    },
}

/// Convenience alias for results returned by tablespec crates.
pub type Result<T> = std::result::Result<T, Error>;
