use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Observed profile statistics for a single column.
///
/// Produced by an external dataframe or profiling engine and consumed
/// here; never part of the persisted UMF shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnProfile {
    pub column_name: String,
    /// Fraction of non-null values, in [0, 1].
    pub completeness: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approximate_num_distinct: Option<u64>,
    /// Engine type token observed for the column (e.g. `StringType`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_deviation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_values: Option<Vec<String>>,
}

/// Complete profile of a dataframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DataFrameProfile {
    pub num_records: u64,
    /// Column profiles keyed by column name.
    pub columns: BTreeMap<String, ColumnProfile>,
}
