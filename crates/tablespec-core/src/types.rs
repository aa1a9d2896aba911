use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::TypeMappingError;

/// Semantic column types understood by the UMF format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    Varchar,
    Char,
    Text,
    Integer,
    Decimal,
    Float,
    Date,
    DateTime,
    Boolean,
}

impl DataType {
    /// Every supported data type, in canonical order.
    pub const ALL: [DataType; 9] = [
        DataType::Varchar,
        DataType::Char,
        DataType::Text,
        DataType::Integer,
        DataType::Decimal,
        DataType::Float,
        DataType::Date,
        DataType::DateTime,
        DataType::Boolean,
    ];

    /// Parse a type token, ignoring case.
    pub fn parse(name: &str) -> Result<Self, TypeMappingError> {
        match name.trim().to_ascii_uppercase().as_str() {
            "VARCHAR" => Ok(DataType::Varchar),
            "CHAR" => Ok(DataType::Char),
            "TEXT" => Ok(DataType::Text),
            "INTEGER" => Ok(DataType::Integer),
            "DECIMAL" => Ok(DataType::Decimal),
            "FLOAT" => Ok(DataType::Float),
            "DATE" => Ok(DataType::Date),
            "DATETIME" => Ok(DataType::DateTime),
            "BOOLEAN" => Ok(DataType::Boolean),
            _ => Err(TypeMappingError::UnknownType {
                name: name.to_string(),
            }),
        }
    }

    /// Canonical uppercase token for the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Varchar => "VARCHAR",
            DataType::Char => "CHAR",
            DataType::Text => "TEXT",
            DataType::Integer => "INTEGER",
            DataType::Decimal => "DECIMAL",
            DataType::Float => "FLOAT",
            DataType::Date => "DATE",
            DataType::DateTime => "DATETIME",
            DataType::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-dependent modifiers attached to a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeModifiers {
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
}

impl TypeModifiers {
    /// Read the modifier subset out of a plain column mapping.
    pub fn from_column(column: &Value) -> Self {
        let get = |key: &str| {
            column
                .get(key)
                .and_then(Value::as_u64)
                .map(|value| value as u32)
        };
        Self {
            length: get("length"),
            precision: get("precision"),
            scale: get("scale"),
        }
    }
}

/// Spark runtime type token produced by the mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkType {
    String,
    Integer,
    Decimal { precision: u32, scale: u32 },
    Float,
    Date,
    Timestamp,
    Boolean,
}

impl SparkType {
    /// Engine vocabulary name for the token (e.g. `DecimalType`).
    pub fn name(&self) -> &'static str {
        match self {
            SparkType::String => "StringType",
            SparkType::Integer => "IntegerType",
            SparkType::Decimal { .. } => "DecimalType",
            SparkType::Float => "FloatType",
            SparkType::Date => "DateType",
            SparkType::Timestamp => "TimestampType",
            SparkType::Boolean => "BooleanType",
        }
    }

    /// Constructor expression for StructField definitions.
    pub fn render(&self) -> String {
        match self {
            SparkType::Decimal { precision, scale } => {
                format!("DecimalType({precision},{scale})")
            }
            other => format!("{}()", other.name()),
        }
    }
}

/// Map a UMF type to its Spark runtime token.
pub fn spark_type(
    data_type: DataType,
    modifiers: &TypeModifiers,
) -> Result<SparkType, TypeMappingError> {
    match data_type {
        DataType::Varchar | DataType::Char | DataType::Text => Ok(SparkType::String),
        DataType::Integer => Ok(SparkType::Integer),
        DataType::Decimal => {
            let precision = modifiers
                .precision
                .ok_or(TypeMappingError::MissingModifier {
                    data_type: "DECIMAL",
                    modifier: "precision",
                })?;
            Ok(SparkType::Decimal {
                precision,
                scale: modifiers.scale.unwrap_or(0),
            })
        }
        DataType::Float => Ok(SparkType::Float),
        DataType::Date => Ok(SparkType::Date),
        DataType::DateTime => Ok(SparkType::Timestamp),
        DataType::Boolean => Ok(SparkType::Boolean),
    }
}

/// Map a UMF type to a JSON Schema property fragment.
pub fn json_schema_type(
    data_type: DataType,
    modifiers: &TypeModifiers,
) -> Result<Value, TypeMappingError> {
    let fragment = match data_type {
        DataType::Varchar | DataType::Char => {
            let length = modifiers.length.ok_or(TypeMappingError::MissingModifier {
                data_type: data_type.as_str(),
                modifier: "length",
            })?;
            json!({"type": "string", "maxLength": length})
        }
        DataType::Text | DataType::Date | DataType::DateTime => json!({"type": "string"}),
        DataType::Integer => json!({"type": "integer"}),
        // JSON Schema has no encoding for precision or scale; the baseline
        // generator carries them in expectation metadata instead.
        DataType::Decimal | DataType::Float => json!({"type": "number"}),
        DataType::Boolean => json!({"type": "boolean"}),
    };
    Ok(fragment)
}

/// Map a UMF type to the expectation engine's type vocabulary.
pub fn expectation_type(data_type: DataType) -> &'static str {
    match data_type {
        DataType::Varchar | DataType::Char | DataType::Text => "StringType",
        DataType::Integer => "IntegerType",
        DataType::Decimal => "DecimalType",
        DataType::Float => "FloatType",
        DataType::Date => "DateType",
        DataType::DateTime => "TimestampType",
        DataType::Boolean => "BooleanType",
    }
}
