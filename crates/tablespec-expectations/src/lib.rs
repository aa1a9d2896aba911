//! Expectation suite tooling for UMF documents.
//!
//! Baseline generation projects a schema document into a deterministic
//! expectation suite; extraction runs the other way, reconstructing
//! UMF-shaped validation rules from an existing suite. Suite documents can
//! also be validated against their generated JSON Schema.

pub mod baseline;
pub mod errors;
pub mod extract;
pub mod suite;
pub mod validate;

pub use baseline::{build_suite, column_expectations, generate_baseline_expectations};
pub use errors::{
    ExtractionIssue, IssueSeverity, Result, SuiteError, ValidationIssue, ValidationReport,
};
pub use extract::{
    extract_regex_patterns, extract_strftime_formats, extract_validation_rules,
    extract_value_sets, Extraction,
};
pub use suite::{suite_json_schema, Expectation, ExpectationSuite};
pub use validate::validate_suite_json;
