use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::types::{DataType, TypeModifiers};

/// Top-level UMF document describing a single table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Umf {
    /// UMF format version (`MAJOR.MINOR`).
    pub version: String,
    /// Database table name.
    pub table_name: String,
    /// Original source file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    /// Source sheet name when the layout came from a workbook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_name: Option<String>,
    /// Human-readable table description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Table classification: `data_table`, `lookup_table`, or `configuration`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
    /// Column definitions in declaration order.
    pub columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_rules: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Relationships>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Umf {
    /// Deserialize and validate a document from its plain-mapping projection.
    pub fn from_value(value: Value) -> Result<Self> {
        let umf: Umf = serde_json::from_value(value)?;
        crate::validation::validate_umf(&umf)?;
        Ok(umf)
    }

    /// Plain-mapping projection consumed by the generators.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// UMF column definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
    /// Source column position or identifier, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Nullability by LOB code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<Nullable>,
    /// Illustrative values; advisory only, never validated against the type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_values: Option<Vec<String>>,
    /// Maximum length for VARCHAR and CHAR columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Precision for DECIMAL columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    /// Scale for DECIMAL columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    /// Unstructured format pattern carried over from the source
    /// specification, e.g. a date pattern or a value enumeration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Free-form notes and business rules from the source specification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

impl Column {
    /// Modifier subset consumed by the type mapping table.
    pub fn modifiers(&self) -> TypeModifiers {
        TypeModifiers {
            length: self.length,
            precision: self.precision,
            scale: self.scale,
        }
    }
}

/// Nullability flags per line of business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Nullable {
    /// Nullable for the Medicaid population.
    #[serde(rename = "MD")]
    pub md: bool,
    /// Nullable for the Marketplace population.
    #[serde(rename = "MP")]
    pub mp: bool,
    /// Nullable for the Medicare population.
    #[serde(rename = "ME")]
    pub me: bool,
}

impl Nullable {
    /// A column is required only when no LOB allows nulls.
    pub fn is_required(&self) -> bool {
        !self.md && !self.mp && !self.me
    }

    /// LOB codes for which the column must not be null.
    pub fn required_lobs(&self) -> Vec<&'static str> {
        let mut lobs = Vec::new();
        if !self.md {
            lobs.push("MD");
        }
        if !self.mp {
            lobs.push("MP");
        }
        if !self.me {
            lobs.push("ME");
        }
        lobs
    }
}

/// Severity attached to a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single declarative validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationRule {
    /// Open vocabulary tag (`row_count`, `uniqueness`, `range`, `format`, ...).
    pub rule_type: String,
    pub description: String,
    pub severity: Severity,
    /// Rule parameters; shape depends on `rule_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

/// Validation rules grouped by scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationRules {
    /// Rules with no associated column, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_level: Option<Vec<ValidationRule>>,
    /// Rules keyed by column name, each sequence in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_level: Option<BTreeMap<String, Vec<ValidationRule>>>,
}

/// Foreign key relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForeignKey {
    /// Source column name.
    pub column: String,
    pub references_table: String,
    pub references_column: String,
    /// Confidence score for the relationship, in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Reverse foreign key relationship.
///
/// Not automatically kept in sync with other documents; cross-document
/// consistency is a caller responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReferencedBy {
    /// Referencing table name.
    pub table: String,
    /// Referenced column name.
    pub column: String,
    /// Foreign key column name on the referencing table.
    pub foreign_key_column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Index hint emitted into the DDL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IndexHint {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Table relationships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Relationships {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_keys: Option<Vec<ForeignKey>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_by: Option<Vec<ReferencedBy>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexes: Option<Vec<IndexHint>>,
}

/// Additional document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Creator identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Pipeline phase that created or last updated the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_phase: Option<u8>,
    /// Last modified timestamp of the source layout file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file_modified: Option<DateTime<Utc>>,
}
