//! SQL DDL generation from a UMF document projection.

use serde_json::Value;

use tablespec_core::project as umf;
use tablespec_core::{DataType, TypeMappingError, TypeModifiers};

use crate::errors::{GenerateError, Result};
use crate::project;

const MAX_COMMENT_LENGTH: usize = 255;

/// Generate a CREATE TABLE statement from a UMF document projection.
///
/// Columns appear in document order; a column is `NOT NULL` only when every
/// LOB flag in its nullable map is false. Output is deterministic: the only
/// timestamp comes from `metadata.source_file_modified` in the input.
pub fn generate_sql_ddl(document: &Value) -> Result<String> {
    let table_name = project::table_name(document)?;

    let mut lines = vec![
        format!("-- DDL for {table_name}"),
        "-- Generated from UMF specification".to_string(),
    ];
    if let Some(stamp) = umf::source_modified_stamp(document) {
        lines.push(format!("-- Source file modified: {stamp}"));
    }
    lines.push(String::new());
    lines.push(format!("CREATE TABLE {table_name} ("));

    let mut column_defs = Vec::new();
    for column in project::columns(document)? {
        column_defs.push(render_column(column)?);
    }
    lines.push(column_defs.join(",\n"));
    lines.push(")".to_string());

    if let Some(description) = document.get("description").and_then(Value::as_str) {
        lines.push(format!("COMMENT '{}'", escape_comment(description)));
    }
    lines.push(";".to_string());

    append_index_statements(document, table_name, &mut lines);

    Ok(lines.join("\n"))
}

fn render_column(column: &Value) -> Result<String> {
    let name = project::column_name(column)?;
    let data_type = project::column_type(column)?;
    let modifiers = project::modifiers(column);
    let sql_type =
        sql_type_token(data_type, &modifiers).map_err(|source| GenerateError::Mapping {
            column: name.to_string(),
            source,
        })?;
    let not_null = if umf::is_required(column) {
        " NOT NULL"
    } else {
        ""
    };

    let mut definition = format!("    {name} {sql_type}{not_null}");
    if let Some(description) = umf::description(column) {
        definition.push_str(&format!(" COMMENT '{}'", escape_comment(description)));
    }
    Ok(definition)
}

/// SQL type token for a column, Spark SQL dialect.
fn sql_type_token(
    data_type: DataType,
    modifiers: &TypeModifiers,
) -> std::result::Result<String, TypeMappingError> {
    let token = match data_type {
        DataType::Varchar => {
            let length = modifiers.length.ok_or(TypeMappingError::MissingModifier {
                data_type: "VARCHAR",
                modifier: "length",
            })?;
            format!("VARCHAR({length})")
        }
        DataType::Char => {
            let length = modifiers.length.ok_or(TypeMappingError::MissingModifier {
                data_type: "CHAR",
                modifier: "length",
            })?;
            format!("CHAR({length})")
        }
        DataType::Text => "STRING".to_string(),
        DataType::Integer => "INT".to_string(),
        DataType::Decimal => {
            let precision = modifiers
                .precision
                .ok_or(TypeMappingError::MissingModifier {
                    data_type: "DECIMAL",
                    modifier: "precision",
                })?;
            let scale = modifiers.scale.unwrap_or(0);
            format!("DECIMAL({precision},{scale})")
        }
        DataType::Float => "FLOAT".to_string(),
        DataType::Date => "DATE".to_string(),
        DataType::DateTime => "TIMESTAMP".to_string(),
        DataType::Boolean => "BOOLEAN".to_string(),
    };
    Ok(token)
}

fn escape_comment(text: &str) -> String {
    let escaped = text.replace('\'', "''");
    escaped.chars().take(MAX_COMMENT_LENGTH).collect()
}

fn append_index_statements(document: &Value, table_name: &str, lines: &mut Vec<String>) {
    let Some(indexes) = document
        .get("relationships")
        .and_then(|relationships| relationships.get("indexes"))
        .and_then(Value::as_array)
    else {
        return;
    };
    if indexes.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push("-- Indexes".to_string());
    for index in indexes {
        let (Some(name), Some(columns)) = (
            index.get("name").and_then(Value::as_str),
            index.get("columns").and_then(Value::as_array),
        ) else {
            continue;
        };
        let unique = if index.get("unique").and_then(Value::as_bool).unwrap_or(false) {
            "UNIQUE "
        } else {
            ""
        };
        let column_list = columns
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "CREATE {unique}INDEX {name} ON {table_name} ({column_list});"
        ));
    }
}
