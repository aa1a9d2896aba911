//! Reconstruct UMF validation rules from an expectation suite.
//!
//! The inverse of baseline generation: every record in the input suite is
//! either mapped to a known rule type, passed through verbatim under its
//! raw identifier, or reported as a per-record issue. Nothing is dropped,
//! and one malformed record never aborts extraction of the rest.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::warn;

use tablespec_core::{Severity, ValidationRule, ValidationRules};

use crate::errors::ExtractionIssue;

/// Result of extracting rules from an expectation suite.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    pub rules: ValidationRules,
    /// Per-record diagnostics for records that could not be extracted.
    pub issues: Vec<ExtractionIssue>,
}

impl Extraction {
    /// Total rules reconstructed across both scopes.
    pub fn rule_count(&self) -> usize {
        let table = self.rules.table_level.as_ref().map_or(0, Vec::len);
        let column = self
            .rules
            .column_level
            .as_ref()
            .map_or(0, |columns| columns.values().map(Vec::len).sum());
        table + column
    }
}

enum Scope {
    Table,
    Column(String),
}

/// Extract validation rules from a suite document projection.
pub fn extract_validation_rules(suite: &Value) -> Extraction {
    let mut extraction = Extraction::default();
    let mut table_level: Vec<ValidationRule> = Vec::new();
    let mut column_level: BTreeMap<String, Vec<ValidationRule>> = BTreeMap::new();

    let Some(records) = suite.get("expectations").and_then(Value::as_array) else {
        return extraction;
    };

    for (index, record) in records.iter().enumerate() {
        match extract_record(record) {
            Ok((Scope::Table, rule)) => table_level.push(rule),
            Ok((Scope::Column(column), rule)) => {
                column_level.entry(column).or_default().push(rule);
            }
            Err((expectation_type, message)) => {
                warn!(index, reason = %message, "skipping malformed expectation record");
                extraction.issues.push(ExtractionIssue {
                    index,
                    expectation_type,
                    message,
                });
            }
        }
    }

    if !table_level.is_empty() {
        extraction.rules.table_level = Some(table_level);
    }
    if !column_level.is_empty() {
        extraction.rules.column_level = Some(column_level);
    }
    extraction
}

type RecordError = (Option<String>, String);

fn extract_record(record: &Value) -> Result<(Scope, ValidationRule), RecordError> {
    let Some(record) = record.as_object() else {
        return Err((None, "expectation record is not a mapping".to_string()));
    };

    let expectation_type = match record.get("type") {
        Some(Value::String(expectation_type)) => expectation_type.clone(),
        Some(_) => return Err((None, "`type` must be a string".to_string())),
        None => return Err((None, "expectation record is missing `type`".to_string())),
    };

    let kwargs = match record.get("kwargs") {
        Some(Value::Object(kwargs)) => kwargs.clone(),
        Some(_) => {
            return Err((
                Some(expectation_type),
                "`kwargs` must be a mapping".to_string(),
            ));
        }
        None => Map::new(),
    };

    let column = match kwargs.get("column") {
        Some(Value::String(column)) => Some(column.clone()),
        Some(_) => {
            return Err((
                Some(expectation_type),
                "`column` must be a string".to_string(),
            ));
        }
        None => None,
    };

    let severity = severity_from_meta(record.get("meta"));
    let description = description_from_meta(record.get("meta"), &expectation_type);

    let (rule_type, scope, parameters) = classify(&expectation_type, column, kwargs)
        .map_err(|message| (Some(expectation_type.clone()), message))?;

    Ok((
        scope,
        ValidationRule {
            rule_type,
            description,
            severity,
            parameters,
        },
    ))
}

type Classified = (String, Scope, Option<Value>);

/// Engine identifier → UMF rule type, table scope.
const TABLE_RULES: &[(&str, &str)] = &[
    ("expect_table_row_count_to_be_between", "row_count"),
    ("expect_table_column_count_to_equal", "column_count"),
    ("expect_table_columns_to_match_ordered_list", "column_order"),
];

/// Engine identifier → UMF rule type, column scope.
const COLUMN_RULES: &[(&str, &str)] = &[
    ("expect_column_to_exist", "existence"),
    ("expect_column_values_to_be_of_type", "data_type"),
    ("expect_column_values_to_not_be_null", "not_null"),
    ("expect_column_values_to_be_unique", "uniqueness"),
    ("expect_column_values_to_be_between", "range"),
    ("expect_column_value_lengths_to_be_between", "length"),
    ("expect_column_values_to_match_regex", "format"),
    ("expect_column_values_to_match_strftime_format", "format"),
    ("expect_column_values_to_be_in_set", "value_set"),
];

fn classify(
    expectation_type: &str,
    column: Option<String>,
    mut kwargs: Map<String, Value>,
) -> Result<Classified, String> {
    if let Some((_, rule_type)) = TABLE_RULES
        .iter()
        .find(|(identifier, _)| *identifier == expectation_type)
    {
        return Ok((
            rule_type.to_string(),
            Scope::Table,
            non_empty_params(kwargs),
        ));
    }

    if let Some((_, rule_type)) = COLUMN_RULES
        .iter()
        .find(|(identifier, _)| *identifier == expectation_type)
    {
        let Some(column) = column else {
            return Err(format!("`{expectation_type}` requires a `column` kwarg"));
        };
        // the column lands in the rule key, not its parameters
        kwargs.shift_remove("column");
        return Ok((
            rule_type.to_string(),
            Scope::Column(column),
            non_empty_params(kwargs),
        ));
    }

    // unrecognized identifiers pass through verbatim so a later
    // regeneration cannot lose them
    let scope = match column {
        Some(column) => Scope::Column(column),
        None => Scope::Table,
    };
    Ok((
        expectation_type.to_string(),
        scope,
        non_empty_params(kwargs),
    ))
}

fn non_empty_params(kwargs: Map<String, Value>) -> Option<Value> {
    if kwargs.is_empty() {
        None
    } else {
        Some(Value::Object(kwargs))
    }
}

fn severity_from_meta(meta: Option<&Value>) -> Severity {
    match meta
        .and_then(|meta| meta.get("severity"))
        .and_then(Value::as_str)
    {
        Some("critical") => Severity::Error,
        _ => Severity::Warning,
    }
}

fn description_from_meta(meta: Option<&Value>, expectation_type: &str) -> String {
    meta.and_then(|meta| meta.get("description"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Extracted from `{expectation_type}`"))
}

/// Column → allowed-value mappings from `expect_column_values_to_be_in_set`
/// records, values stringified.
pub fn extract_value_sets(suite: &Value) -> BTreeMap<String, Vec<String>> {
    let mut value_sets = BTreeMap::new();
    for kwargs in kwargs_of_type(suite, "expect_column_values_to_be_in_set") {
        let (Some(column), Some(values)) = (
            kwargs.get("column").and_then(Value::as_str),
            kwargs.get("value_set").and_then(Value::as_array),
        ) else {
            continue;
        };
        if values.is_empty() {
            continue;
        }
        value_sets.insert(column.to_string(), values.iter().map(stringify).collect());
    }
    value_sets
}

/// Column → regex pattern mappings from `expect_column_values_to_match_regex`.
pub fn extract_regex_patterns(suite: &Value) -> BTreeMap<String, String> {
    string_kwarg_by_column(suite, "expect_column_values_to_match_regex", "regex")
}

/// Column → strftime format mappings from
/// `expect_column_values_to_match_strftime_format`.
pub fn extract_strftime_formats(suite: &Value) -> BTreeMap<String, String> {
    string_kwarg_by_column(
        suite,
        "expect_column_values_to_match_strftime_format",
        "strftime_format",
    )
}

fn string_kwarg_by_column(
    suite: &Value,
    expectation_type: &str,
    key: &str,
) -> BTreeMap<String, String> {
    let mut by_column = BTreeMap::new();
    for kwargs in kwargs_of_type(suite, expectation_type) {
        let (Some(column), Some(value)) = (
            kwargs.get("column").and_then(Value::as_str),
            kwargs.get(key).and_then(Value::as_str),
        ) else {
            continue;
        };
        by_column.insert(column.to_string(), value.to_string());
    }
    by_column
}

fn kwargs_of_type<'a>(
    suite: &'a Value,
    expectation_type: &'a str,
) -> impl Iterator<Item = &'a Map<String, Value>> {
    suite
        .get("expectations")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(move |record| {
            record.get("type").and_then(Value::as_str) == Some(expectation_type)
        })
        .filter_map(|record| record.get("kwargs").and_then(Value::as_object))
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
