//! Read-only helpers over the plain-mapping projection of a UMF document.
//!
//! Generators accept the projection rather than the validated entity, so
//! field access and the nullability aggregation rule live here, in one
//! place, for every downstream consumer.

use chrono::DateTime;
use serde_json::Value;

/// Table name from a document projection.
pub fn table_name(umf: &Value) -> Option<&str> {
    umf.get("table_name").and_then(Value::as_str)
}

/// Columns array from a document projection.
pub fn columns(umf: &Value) -> Option<&Vec<Value>> {
    umf.get("columns").and_then(Value::as_array)
}

/// Column name from a column mapping.
pub fn column_name(column: &Value) -> Option<&str> {
    column.get("name").and_then(Value::as_str)
}

/// Raw data type token from a column mapping.
pub fn data_type_token(column: &Value) -> Option<&str> {
    column.get("data_type").and_then(Value::as_str)
}

/// Column description from a column mapping.
pub fn description(column: &Value) -> Option<&str> {
    column.get("description").and_then(Value::as_str)
}

/// Sample values from a column mapping, stringified.
pub fn sample_values(column: &Value) -> Vec<String> {
    column
        .get("sample_values")
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .map(|value| match value {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Nullability aggregation rule shared by every generator.
///
/// A column is required (`NOT NULL`, JSON Schema `required`, baseline
/// not-null expectation) only when the `nullable` map is present and every
/// LOB flag is false. A missing map or any true flag leaves the column
/// nullable.
pub fn is_required(column: &Value) -> bool {
    let Some(nullable) = column.get("nullable").and_then(Value::as_object) else {
        return false;
    };
    !nullable.is_empty() && nullable.values().all(|flag| flag == &Value::Bool(false))
}

/// LOB codes whose flag marks the column as not nullable.
pub fn required_lobs(column: &Value) -> Vec<String> {
    column
        .get("nullable")
        .and_then(Value::as_object)
        .map(|nullable| {
            nullable
                .iter()
                .filter(|(_, flag)| *flag == &Value::Bool(false))
                .map(|(lob, _)| lob.clone())
                .collect()
        })
        .unwrap_or_default()
}

/// Source-file modification stamp from document metadata, formatted for
/// artifact headers. Returns the raw string when it is not a timestamp.
pub fn source_modified_stamp(umf: &Value) -> Option<String> {
    let raw = umf
        .get("metadata")?
        .get("source_file_modified")?
        .as_str()?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(stamp) => Some(stamp.format("%Y-%m-%d %H:%M:%S").to_string()),
        Err(_) => Some(raw.to_string()),
    }
}
