use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::model::{Column, Umf};
use crate::types::DataType;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("identifier pattern compiles"));

const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Default length applied to VARCHAR columns missing one.
pub const DEFAULT_VARCHAR_LENGTH: u32 = 255;
/// Default precision applied to DECIMAL columns missing one.
pub const DEFAULT_DECIMAL_PRECISION: u32 = 18;
/// Default scale applied to DECIMAL columns missing one.
pub const DEFAULT_DECIMAL_SCALE: u32 = 2;

/// Validate structural invariants of a UMF document.
///
/// This checks:
/// - version and identifier conventions
/// - duplicate column names (compared ignoring ASCII case, since every
///   generated target treats identifiers case-insensitively)
/// - type modifier consistency per column
/// - relationship confidence bounds
pub fn validate_umf(umf: &Umf) -> Result<()> {
    validate_version(&umf.version)?;
    validate_identifier(&umf.table_name).map_err(|reason| Error::InvalidTableName {
        name: umf.table_name.clone(),
        reason,
    })?;

    if umf.columns.is_empty() {
        return Err(Error::EmptyColumns);
    }

    let mut seen = BTreeSet::new();
    for column in &umf.columns {
        validate_identifier(&column.name).map_err(|reason| Error::InvalidColumnName {
            name: column.name.clone(),
            reason,
        })?;
        if !seen.insert(column.name.to_ascii_lowercase()) {
            return Err(Error::DuplicateColumn {
                name: column.name.clone(),
            });
        }
        validate_modifiers(column)?;
    }

    if let Some(relationships) = &umf.relationships {
        for fk in relationships.foreign_keys.iter().flatten() {
            validate_confidence(&fk.column, fk.confidence)?;
        }
        for referenced in relationships.referenced_by.iter().flatten() {
            validate_confidence(&referenced.foreign_key_column, referenced.confidence)?;
        }
    }

    Ok(())
}

/// Fill in default modifiers on a plain document mapping.
///
/// Repairs layouts extracted from incomplete source specifications before
/// they are parsed into the validated model: VARCHAR columns without a
/// length and DECIMAL columns without precision or scale receive the
/// documented defaults. Columns of other types are left untouched.
pub fn apply_default_modifiers(umf: &mut Value) {
    let Some(columns) = umf.get_mut("columns").and_then(Value::as_array_mut) else {
        return;
    };

    for column in columns {
        let Some(object) = column.as_object_mut() else {
            continue;
        };
        let data_type = object
            .get("data_type")
            .and_then(Value::as_str)
            .map(str::to_ascii_uppercase);
        match data_type.as_deref() {
            Some("VARCHAR") => {
                object
                    .entry("length".to_string())
                    .or_insert_with(|| json!(DEFAULT_VARCHAR_LENGTH));
            }
            Some("DECIMAL") => {
                object
                    .entry("precision".to_string())
                    .or_insert_with(|| json!(DEFAULT_DECIMAL_PRECISION));
                object
                    .entry("scale".to_string())
                    .or_insert_with(|| json!(DEFAULT_DECIMAL_SCALE));
            }
            _ => {}
        }
    }
}

fn validate_version(version: &str) -> Result<()> {
    let parts: Vec<&str> = version.split('.').collect();
    let numeric = parts.len() == 2
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
    if numeric {
        Ok(())
    } else {
        Err(Error::InvalidVersion {
            version: version.to_string(),
        })
    }
}

fn validate_identifier(name: &str) -> std::result::Result<(), String> {
    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(format!("exceeds {MAX_IDENTIFIER_LENGTH} characters"));
    }
    if !IDENTIFIER.is_match(name) {
        return Err(
            "must start with a letter and contain only letters, digits, and underscores"
                .to_string(),
        );
    }
    Ok(())
}

fn validate_modifiers(column: &Column) -> Result<()> {
    let data_type = column.data_type.as_str();

    match column.data_type {
        DataType::Varchar | DataType::Char => {
            if column.length.is_none() {
                return Err(Error::MissingModifier {
                    column: column.name.clone(),
                    data_type,
                    modifier: "length",
                });
            }
        }
        _ => {
            if column.length.is_some() {
                return Err(Error::UnexpectedModifier {
                    column: column.name.clone(),
                    data_type,
                    modifier: "length",
                });
            }
        }
    }

    match column.data_type {
        DataType::Decimal => {
            let precision = column.precision.ok_or_else(|| Error::MissingModifier {
                column: column.name.clone(),
                data_type,
                modifier: "precision",
            })?;
            if let Some(scale) = column.scale
                && scale > precision
            {
                return Err(Error::ScaleExceedsPrecision {
                    column: column.name.clone(),
                    scale,
                    precision,
                });
            }
        }
        _ => {
            if column.precision.is_some() {
                return Err(Error::UnexpectedModifier {
                    column: column.name.clone(),
                    data_type,
                    modifier: "precision",
                });
            }
            if column.scale.is_some() {
                return Err(Error::UnexpectedModifier {
                    column: column.name.clone(),
                    data_type,
                    modifier: "scale",
                });
            }
        }
    }

    Ok(())
}

fn validate_confidence(column: &str, confidence: Option<f64>) -> Result<()> {
    if let Some(confidence) = confidence
        && !(0.0..=1.0).contains(&confidence)
    {
        return Err(Error::InvalidConfidence {
            column: column.to_string(),
            confidence,
        });
    }
    Ok(())
}
