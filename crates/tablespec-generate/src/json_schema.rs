//! JSON Schema generation from a UMF document projection.

use serde_json::{json, Map, Value};

use tablespec_core::json_schema_type;
use tablespec_core::project as umf;

use crate::errors::{GenerateError, Result};
use crate::project;

const MAX_EXAMPLES: usize = 3;

/// Generate a draft-07 JSON Schema from a UMF document projection.
///
/// Properties follow document column order; `required` lists the columns
/// whose nullable map marks every LOB as not nullable, also in document
/// order.
pub fn generate_json_schema(document: &Value) -> Result<Value> {
    let table_name = project::table_name(document)?;
    let description = document
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Schema for {table_name} table"));

    let mut properties = Map::new();
    let mut required = Vec::new();

    for column in project::columns(document)? {
        let name = project::column_name(column)?;
        let data_type = project::column_type(column)?;
        let mut property = json_schema_type(data_type, &project::modifiers(column)).map_err(
            |source| GenerateError::Mapping {
                column: name.to_string(),
                source,
            },
        )?;

        if let Some(object) = property.as_object_mut() {
            object.insert(
                "description".to_string(),
                Value::String(umf::description(column).unwrap_or_default().to_string()),
            );
            let samples = umf::sample_values(column);
            if !samples.is_empty() {
                let examples = samples
                    .into_iter()
                    .take(MAX_EXAMPLES)
                    .map(Value::String)
                    .collect();
                object.insert("examples".to_string(), Value::Array(examples));
            }
        }

        properties.insert(name.to_string(), property);
        if umf::is_required(column) {
            required.push(Value::String(name.to_string()));
        }
    }

    Ok(json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": format!("{table_name} Schema"),
        "type": "object",
        "description": description,
        "properties": properties,
        "required": required,
    }))
}
