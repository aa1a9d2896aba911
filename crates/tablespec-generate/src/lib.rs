//! Schema artifact generators for UMF documents.
//!
//! Each generator is a pure function from a document's plain-mapping
//! projection to a target artifact: SQL DDL text, Spark runtime schema
//! source, or a JSON Schema document. Identical input yields identical
//! output, which keeps downstream diffing and caching stable.

pub mod ddl;
pub mod errors;
pub mod json_schema;
pub mod prompts;
mod project;
pub mod spark;

pub use ddl::generate_sql_ddl;
pub use errors::{GenerateError, Result};
pub use json_schema::generate_json_schema;
pub use prompts::{documentation_prompt, has_validation_rule_hints};
pub use spark::generate_spark_schema;
