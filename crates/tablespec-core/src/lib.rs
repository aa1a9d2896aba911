//! Core contracts and helpers for tablespec.
//!
//! This crate defines the canonical UMF document types, the type mapping
//! table, structural validation, and YAML persistence shared across the
//! generator and expectation crates.

pub mod error;
pub mod model;
pub mod project;
pub mod types;
pub mod validation;
pub mod yaml;

pub use error::{Error, Result, TypeMappingError};
pub use model::{
    Column, ForeignKey, IndexHint, Metadata, Nullable, ReferencedBy, Relationships, Severity, Umf,
    ValidationRule, ValidationRules,
};
pub use types::{
    expectation_type, json_schema_type, spark_type, DataType, SparkType, TypeModifiers,
};
pub use validation::{apply_default_modifiers, validate_umf};
pub use yaml::{load_umf_from_path, load_umf_from_str, save_umf_to_path, umf_to_string};

use schemars::schema::RootSchema;
use schemars::schema_for;

/// Current UMF contract version for persisted documents.
pub const UMF_VERSION: &str = "1.0";

/// Emit the JSON Schema for persisted UMF documents.
pub fn umf_json_schema() -> RootSchema {
    schema_for!(model::Umf)
}
