//! Spark runtime schema generation from a UMF document projection.

use serde_json::Value;

use tablespec_core::project as umf;
use tablespec_core::spark_type;

use crate::errors::{GenerateError, Result};
use crate::project;

/// Generate PySpark StructType source text from a UMF document projection.
///
/// Fields appear in document order; the nullability flag follows the same
/// aggregation rule as the DDL generator.
pub fn generate_spark_schema(document: &Value) -> Result<String> {
    let table_name = project::table_name(document)?;

    let mut lines = vec![
        format!("# PySpark Schema for {table_name}"),
        "# Generated from UMF specification".to_string(),
    ];
    if let Some(stamp) = umf::source_modified_stamp(document) {
        lines.push(format!("# Source file modified: {stamp}"));
    }
    lines.push(String::new());
    lines.push("from pyspark.sql.types import StructType, StructField".to_string());
    lines.push("from pyspark.sql.types import StringType, IntegerType, DecimalType".to_string());
    lines.push(
        "from pyspark.sql.types import FloatType, BooleanType, DateType, TimestampType"
            .to_string(),
    );
    lines.push(String::new());
    lines.push(format!(
        "{}_schema = StructType([",
        table_name.to_lowercase()
    ));

    let mut fields = Vec::new();
    for column in project::columns(document)? {
        let name = project::column_name(column)?;
        let data_type = project::column_type(column)?;
        let spark = spark_type(data_type, &project::modifiers(column)).map_err(|source| {
            GenerateError::Mapping {
                column: name.to_string(),
                source,
            }
        })?;
        let nullable = if umf::is_required(column) {
            "False"
        } else {
            "True"
        };
        fields.push(format!(
            "    StructField(\"{name}\", {}, {nullable})",
            spark.render()
        ));
    }
    lines.push(fields.join(",\n"));
    lines.push("])".to_string());

    Ok(lines.join("\n"))
}
