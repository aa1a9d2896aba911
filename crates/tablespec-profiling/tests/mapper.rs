use std::collections::BTreeMap;

use serde_json::json;

use tablespec_core::{DataType, Nullable};
use tablespec_profiling::{
    enrich_umf_with_profiling, umf_from_profile, ColumnProfile, DataFrameProfile,
};

fn profile_of(columns: Vec<ColumnProfile>) -> DataFrameProfile {
    DataFrameProfile {
        num_records: 1000,
        columns: columns
            .into_iter()
            .map(|column| (column.column_name.clone(), column))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn column_profile(name: &str, completeness: f64, data_type: &str) -> ColumnProfile {
    ColumnProfile {
        column_name: name.to_string(),
        completeness,
        approximate_num_distinct: None,
        data_type: Some(data_type.to_string()),
        minimum: None,
        maximum: None,
        mean: None,
        standard_deviation: None,
        sample_values: None,
    }
}

#[test]
fn enrich_adds_metadata_and_column_sections() {
    let mut document = json!({
        "table_name": "Members",
        "columns": [
            {"name": "member_id", "data_type": "VARCHAR", "length": 30},
            {"name": "unprofiled", "data_type": "TEXT"}
        ]
    });

    let mut profiled = column_profile("member_id", 0.95, "StringType");
    profiled.approximate_num_distinct = Some(950);
    profiled.minimum = Some(json!("M0001"));
    profiled.maximum = Some(json!("M9999"));
    let profile = profile_of(vec![profiled]);

    enrich_umf_with_profiling(&mut document, &profile, Some(1000));

    assert_eq!(
        document["profiling_metadata"]["tool"],
        json!("tablespec-profiler")
    );
    assert_eq!(document["profiling_metadata"]["total_rows"], json!(1000));

    let section = &document["columns"][0]["profiling"];
    assert_eq!(section["completeness"], json!(0.95));
    assert_eq!(section["approximate_num_distinct"], json!(950));
    assert_eq!(section["data_type_inferred"], json!("StringType"));
    assert_eq!(section["statistics"]["min"], json!("M0001"));

    assert!(document["columns"][1].get("profiling").is_none());
}

#[test]
fn enrich_rounds_statistics_to_four_decimals() {
    let mut document = json!({
        "table_name": "Claims",
        "columns": [{"name": "paid_amount", "data_type": "FLOAT"}]
    });

    let mut profiled = column_profile("paid_amount", 1.0, "DoubleType");
    profiled.mean = Some(123.456_789);
    profiled.standard_deviation = Some(0.000_123_9);
    let profile = profile_of(vec![profiled]);

    enrich_umf_with_profiling(&mut document, &profile, None);

    let statistics = &document["columns"][0]["profiling"]["statistics"];
    assert_eq!(statistics["mean"], json!(123.4568));
    assert_eq!(statistics["stddev"], json!(0.0001));
}

#[test]
fn synthesized_document_maps_engine_tokens() {
    let profile = profile_of(vec![
        column_profile("member_id", 1.0, "StringType"),
        column_profile("visit_count", 1.0, "LongType"),
        column_profile("paid_amount", 1.0, "DecimalType"),
        column_profile("enrolled", 1.0, "BooleanType"),
        column_profile("service_date", 1.0, "DateType"),
        column_profile("loaded_at", 1.0, "TimestampType"),
    ]);

    let umf = umf_from_profile(&profile, "Member_Claims").expect("synthesize");
    assert_eq!(umf.table_name, "Member_Claims");
    assert_eq!(umf.table_type.as_deref(), Some("inferred"));

    let by_name: BTreeMap<&str, &tablespec_core::Column> = umf
        .columns
        .iter()
        .map(|column| (column.name.as_str(), column))
        .collect();

    assert_eq!(by_name["member_id"].data_type, DataType::Varchar);
    assert_eq!(by_name["member_id"].length, Some(255));
    assert_eq!(by_name["visit_count"].data_type, DataType::Integer);
    assert_eq!(by_name["paid_amount"].data_type, DataType::Decimal);
    assert_eq!(by_name["paid_amount"].precision, Some(18));
    assert_eq!(by_name["paid_amount"].scale, Some(2));
    assert_eq!(by_name["enrolled"].data_type, DataType::Boolean);
    assert_eq!(by_name["service_date"].data_type, DataType::Date);
    assert_eq!(by_name["loaded_at"].data_type, DataType::DateTime);
}

#[test]
fn unknown_tokens_fall_back_to_varchar() {
    let profile = profile_of(vec![column_profile("payload", 1.0, "BinaryType")]);
    let umf = umf_from_profile(&profile, "Raw_Feed").expect("synthesize");
    assert_eq!(umf.columns[0].data_type, DataType::Varchar);
    assert_eq!(umf.columns[0].length, Some(255));
}

#[test]
fn nullability_is_seeded_from_completeness() {
    let profile = profile_of(vec![
        column_profile("always_present", 1.0, "StringType"),
        column_profile("sometimes_null", 0.97, "StringType"),
    ]);

    let umf = umf_from_profile(&profile, "Roster").expect("synthesize");
    let by_name: BTreeMap<&str, &tablespec_core::Column> = umf
        .columns
        .iter()
        .map(|column| (column.name.as_str(), column))
        .collect();

    assert_eq!(
        by_name["always_present"].nullable,
        Some(Nullable {
            md: false,
            mp: false,
            me: false
        })
    );
    assert_eq!(
        by_name["sometimes_null"].nullable,
        Some(Nullable {
            md: true,
            mp: true,
            me: true
        })
    );
}

#[test]
fn synthesized_document_passes_model_validation() {
    let profile = profile_of(vec![column_profile("member_id", 1.0, "StringType")]);
    let umf = umf_from_profile(&profile, "Roster").expect("synthesize");
    assert!(tablespec_core::validate_umf(&umf).is_ok());
}
