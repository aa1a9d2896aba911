//! Deterministic baseline expectations from UMF metadata.
//!
//! Generates the expectations that need no profiling data or reasoning:
//! column existence, column types, nullability, length constraints, and
//! table-level structural checks. This module only produces the
//! expectation specification; evaluation belongs to the external rule
//! engine.

use serde_json::{json, Map, Value};
use tracing::debug;

use tablespec_core::project as umf;
use tablespec_core::{expectation_type, DataType, TypeMappingError, TypeModifiers};

use crate::errors::{Result, SuiteError};
use crate::suite::{Expectation, ExpectationSuite};

/// Generate baseline expectations from a UMF document projection.
///
/// Output order is part of the contract: structural checks first (when
/// requested), then per-column expectations in document order. Identical
/// input always yields the identical sequence.
pub fn generate_baseline_expectations(
    document: &Value,
    include_structural: bool,
) -> Result<Vec<Expectation>> {
    let columns = umf::columns(document).ok_or(SuiteError::MissingField { field: "columns" })?;

    let mut expectations = Vec::new();

    if include_structural {
        expectations.extend(structural_expectations(columns)?);
    }

    for column in columns {
        expectations.extend(column_expectations(column)?);
    }

    Ok(expectations)
}

/// Build a complete expectation suite for a UMF document projection.
pub fn build_suite(document: &Value) -> Result<ExpectationSuite> {
    let table_name = umf::table_name(document).ok_or(SuiteError::MissingField {
        field: "table_name",
    })?;
    let expectations = generate_baseline_expectations(document, true)?;
    debug!(
        table = table_name,
        count = expectations.len(),
        "generated baseline expectations"
    );

    Ok(ExpectationSuite {
        name: format!("{table_name}_suite"),
        meta: into_map(json!({
            "table_name": table_name,
            "generated_by": "tablespec",
        })),
        expectations,
    })
}

fn structural_expectations(columns: &[Value]) -> Result<Vec<Expectation>> {
    if columns.is_empty() {
        return Ok(Vec::new());
    }

    let mut column_names = Vec::with_capacity(columns.len());
    for column in columns {
        column_names
            .push(umf::column_name(column).ok_or(SuiteError::MissingField { field: "name" })?);
    }

    Ok(vec![
        expectation(
            "expect_table_column_count_to_equal",
            json!({"value": columns.len()}),
            json!({
                "description": format!("Table must have exactly {} columns", columns.len()),
                "severity": "critical",
                "generated_from": "baseline",
            }),
        ),
        expectation(
            "expect_table_columns_to_match_ordered_list",
            json!({"column_list": column_names}),
            json!({
                "description": "Table columns must match expected schema in order",
                "severity": "critical",
                "generated_from": "baseline",
            }),
        ),
    ])
}

/// Baseline expectations for a single column mapping.
pub fn column_expectations(column: &Value) -> Result<Vec<Expectation>> {
    let name = umf::column_name(column).ok_or(SuiteError::MissingField { field: "name" })?;
    let token = umf::data_type_token(column).ok_or(SuiteError::MissingField {
        field: "data_type",
    })?;
    let data_type = DataType::parse(token).map_err(|source| SuiteError::Mapping {
        column: name.to_string(),
        source,
    })?;
    let engine_type = expectation_type(data_type);
    let modifiers = TypeModifiers::from_column(column);

    let mut expectations = vec![expectation(
        "expect_column_to_exist",
        json!({"column": name}),
        json!({
            "description": format!("Column {name} must exist in table schema"),
            "severity": "critical",
            "generated_from": "baseline",
        }),
    )];

    let type_description = format!(
        "Column {name} must be {engine_type} (from UMF: {})",
        data_type.as_str()
    );
    let mut type_meta = into_map(json!({
        "description": type_description,
        "severity": "info",
        "generated_from": "baseline",
    }));
    // JSON Schema cannot express precision or scale, so the type
    // expectation carries them for DECIMAL columns.
    if data_type == DataType::Decimal
        && let Some(precision) = modifiers.precision
    {
        type_meta.insert("precision".to_string(), json!(precision));
        type_meta.insert("scale".to_string(), json!(modifiers.scale.unwrap_or(0)));
    }
    expectations.push(Expectation {
        expectation_type: "expect_column_values_to_be_of_type".to_string(),
        kwargs: into_map(json!({"column": name, "type_": engine_type})),
        meta: type_meta,
    });

    if umf::is_required(column) {
        let lobs = umf::required_lobs(column);
        expectations.push(expectation(
            "expect_column_values_to_not_be_null",
            json!({"column": name}),
            json!({
                "description": format!(
                    "Column {name} is required (nullable=false) for LOBs: {}",
                    lobs.join(", ")
                ),
                "severity": "critical",
                "lob": lobs,
                "generated_from": "baseline",
            }),
        ));
    }

    if matches!(data_type, DataType::Varchar | DataType::Char) {
        let Some(length) = modifiers.length else {
            return Err(SuiteError::Mapping {
                column: name.to_string(),
                source: TypeMappingError::MissingModifier {
                    data_type: data_type.as_str(),
                    modifier: "length",
                },
            });
        };
        expectations.push(expectation(
            "expect_column_value_lengths_to_be_between",
            json!({"column": name, "max_value": length}),
            json!({
                "description": format!(
                    "Column {name} values must not exceed {length} characters"
                ),
                "severity": "warning",
                "generated_from": "baseline",
            }),
        ));
    }

    // DATE columns land as YYYYMMDD text; guard the wire format
    if data_type == DataType::Date {
        expectations.push(expectation(
            "expect_column_values_to_match_strftime_format",
            json!({"column": name, "strftime_format": "%Y%m%d"}),
            json!({
                "description": format!("Column {name} must match YYYYMMDD date format"),
                "severity": "warning",
                "generated_from": "baseline",
            }),
        ));
    }

    Ok(expectations)
}

fn expectation(expectation_type: &str, kwargs: Value, meta: Value) -> Expectation {
    Expectation {
        expectation_type: expectation_type.to_string(),
        kwargs: into_map(kwargs),
        meta: into_map(meta),
    }
}

fn into_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
