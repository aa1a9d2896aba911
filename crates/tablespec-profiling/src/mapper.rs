//! Map profile reports onto UMF documents.
//!
//! Two directions: enrich an existing document projection with observed
//! statistics, or synthesize a base document from a profile alone. Both
//! consume only the engine's serialized profile report; the engine itself
//! stays behind the collaborator boundary.

use serde_json::{json, Map, Value};
use tracing::{debug, info};

use tablespec_core::validation::{
    DEFAULT_DECIMAL_PRECISION, DEFAULT_DECIMAL_SCALE, DEFAULT_VARCHAR_LENGTH,
};
use tablespec_core::{validate_umf, Column, DataType, Nullable, Result, Umf, UMF_VERSION};

use crate::types::{ColumnProfile, DataFrameProfile};

/// Tool tag stamped into `profiling_metadata`.
pub const PROFILER_TOOL: &str = "tablespec-profiler";

/// Attach profiling sections to the columns of a UMF document projection.
///
/// Adds a table-level `profiling_metadata` mapping and a per-column
/// `profiling` section for every column the profile covers. The result is
/// a projection artifact for collaborators, not a persistable UMF
/// document.
pub fn enrich_umf_with_profiling(
    document: &mut Value,
    profile: &DataFrameProfile,
    sample_size: Option<u64>,
) {
    if let Some(root) = document.as_object_mut() {
        root.insert(
            "profiling_metadata".to_string(),
            json!({
                "tool": PROFILER_TOOL,
                "version": env!("CARGO_PKG_VERSION"),
                "sample_size": sample_size,
                "total_rows": profile.num_records,
            }),
        );
    }

    let Some(columns) = document.get_mut("columns").and_then(Value::as_array_mut) else {
        return;
    };

    let mut enriched = 0usize;
    for column in columns {
        let Some(name) = column
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
        else {
            continue;
        };
        let Some(column_profile) = profile.columns.get(&name) else {
            continue;
        };

        if column_profile.completeness < 1.0 {
            debug!(
                column = %name,
                completeness = column_profile.completeness,
                "observed nulls during profiling"
            );
        }

        if let Some(object) = column.as_object_mut() {
            object.insert("profiling".to_string(), profiling_section(column_profile));
            enriched += 1;
        }
    }

    info!(columns = enriched, "enriched document with profiling data");
}

/// Synthesize a base UMF document from a dataframe profile.
///
/// Columns appear in profile key order. Engine type tokens map back to
/// UMF semantic types; unmapped tokens fall back to VARCHAR with the
/// default length. Nullability is seeded from completeness: a column with
/// any observed nulls is marked nullable for every LOB.
pub fn umf_from_profile(profile: &DataFrameProfile, table_name: &str) -> Result<Umf> {
    let columns = profile
        .columns
        .iter()
        .map(|(name, column_profile)| column_from_profile(name, column_profile))
        .collect();

    let umf = Umf {
        version: UMF_VERSION.to_string(),
        table_name: table_name.to_string(),
        source_file: None,
        sheet_name: None,
        description: None,
        table_type: Some("inferred".to_string()),
        columns,
        validation_rules: None,
        relationships: None,
        metadata: None,
    };
    validate_umf(&umf)?;

    info!(
        table = table_name,
        columns = umf.columns.len(),
        "synthesized document from profile"
    );
    Ok(umf)
}

fn column_from_profile(name: &str, profile: &ColumnProfile) -> Column {
    let data_type = profile
        .data_type
        .as_deref()
        .and_then(data_type_from_token)
        .unwrap_or_else(|| {
            debug!(column = name, "unmapped engine type, defaulting to VARCHAR");
            DataType::Varchar
        });

    let nullable_flag = profile.completeness < 1.0;
    let nullable = Nullable {
        md: nullable_flag,
        mp: nullable_flag,
        me: nullable_flag,
    };

    let (length, precision, scale) = match data_type {
        DataType::Varchar => (Some(DEFAULT_VARCHAR_LENGTH), None, None),
        DataType::Decimal => (
            None,
            Some(DEFAULT_DECIMAL_PRECISION),
            Some(DEFAULT_DECIMAL_SCALE),
        ),
        _ => (None, None, None),
    };

    Column {
        name: name.to_string(),
        data_type,
        position: None,
        description: Some(format!("{name} (inferred from profile)")),
        nullable: Some(nullable),
        sample_values: profile.sample_values.clone(),
        length,
        precision,
        scale,
        format: None,
        notes: None,
    }
}

/// Engine type token → UMF semantic type.
fn data_type_from_token(token: &str) -> Option<DataType> {
    match token {
        "StringType" => Some(DataType::Varchar),
        "IntegerType" | "LongType" | "ShortType" | "ByteType" => Some(DataType::Integer),
        "FloatType" | "DoubleType" => Some(DataType::Float),
        "DecimalType" => Some(DataType::Decimal),
        "BooleanType" => Some(DataType::Boolean),
        "DateType" => Some(DataType::Date),
        "TimestampType" => Some(DataType::DateTime),
        _ => None,
    }
}

fn profiling_section(profile: &ColumnProfile) -> Value {
    let mut section = Map::new();
    section.insert("completeness".to_string(), json!(profile.completeness));

    if let Some(distinct) = profile.approximate_num_distinct {
        section.insert("approximate_num_distinct".to_string(), json!(distinct));
    }
    if let Some(data_type) = &profile.data_type {
        section.insert("data_type_inferred".to_string(), json!(data_type));
    }

    let mut statistics = Map::new();
    if let Some(minimum) = &profile.minimum {
        statistics.insert("min".to_string(), minimum.clone());
    }
    if let Some(maximum) = &profile.maximum {
        statistics.insert("max".to_string(), maximum.clone());
    }
    if let Some(mean) = profile.mean {
        statistics.insert("mean".to_string(), json!(round4(mean)));
    }
    if let Some(stddev) = profile.standard_deviation {
        statistics.insert("stddev".to_string(), json!(round4(stddev)));
    }
    if !statistics.is_empty() {
        section.insert("statistics".to_string(), Value::Object(statistics));
    }

    Value::Object(section)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
