//! Suite-format validation against the generated JSON Schema.
//!
//! Structural violations come from compiling the suite schema with
//! `jsonschema`; the shape pass adds legacy-layout rejections the schema
//! cannot explain on its own.

use jsonschema::JSONSchema;
use serde_json::Value;

use crate::errors::{IssueSeverity, Result, SuiteError, ValidationIssue, ValidationReport};
use crate::suite::suite_json_schema;

const SEVERITY_VOCABULARY: [&str; 3] = ["critical", "warning", "info"];

/// Validate a suite document against the suite JSON Schema.
pub fn validate_suite_json(suite: &Value) -> Result<ValidationReport> {
    let schema = serde_json::to_value(suite_json_schema())?;
    let compiled =
        JSONSchema::compile(&schema).map_err(|err| SuiteError::Schema(err.to_string()))?;

    let mut report = ValidationReport::default();

    if let Err(errors) = compiled.validate(suite) {
        for error in errors {
            let path = normalized_json_pointer(&error.instance_path.to_string());
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "schema_violation",
                path,
                error.to_string(),
            ));
        }
    }

    check_suite_shape(suite, &mut report);

    Ok(report)
}

/// Legacy-layout and vocabulary checks not covered by the JSON Schema.
fn check_suite_shape(suite: &Value, report: &mut ValidationReport) {
    if suite.get("name").is_none() && suite.get("expectation_suite_name").is_some() {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "legacy_suite_name",
            "/expectation_suite_name",
            "legacy layout: rename `expectation_suite_name` to `name`",
        ));
    }

    if suite.get("data_asset_type").is_some() {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "legacy_data_asset_type",
            "/data_asset_type",
            "legacy field `data_asset_type` is not supported",
        ));
    }

    let Some(records) = suite.get("expectations").and_then(Value::as_array) else {
        return;
    };

    for (index, record) in records.iter().enumerate() {
        let base = format!("/expectations/{index}");

        if record.get("type").is_none() && record.get("expectation_type").is_some() {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "legacy_expectation_type",
                format!("{base}/expectation_type"),
                "legacy layout: rename `expectation_type` to `type`",
            ));
        }

        if let Some(severity) = record
            .get("meta")
            .and_then(|meta| meta.get("severity"))
            .and_then(Value::as_str)
            && !SEVERITY_VOCABULARY.contains(&severity)
        {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "invalid_severity",
                format!("{base}/meta/severity"),
                format!("invalid severity '{severity}' (use: critical, warning, or info)"),
            ));
        }
    }
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}
