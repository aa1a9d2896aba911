//! Projection access with generator error reporting.

use serde_json::Value;

use tablespec_core::project as umf;
use tablespec_core::{DataType, TypeModifiers};

use crate::errors::{GenerateError, Result};

pub(crate) fn table_name(document: &Value) -> Result<&str> {
    umf::table_name(document).ok_or(GenerateError::MissingField {
        field: "table_name",
    })
}

pub(crate) fn columns(document: &Value) -> Result<&Vec<Value>> {
    umf::columns(document).ok_or(GenerateError::MissingField { field: "columns" })
}

pub(crate) fn column_name(column: &Value) -> Result<&str> {
    umf::column_name(column).ok_or(GenerateError::MissingField { field: "name" })
}

pub(crate) fn column_type(column: &Value) -> Result<DataType> {
    let name = column_name(column)?;
    let token = umf::data_type_token(column).ok_or(GenerateError::MissingField {
        field: "data_type",
    })?;
    DataType::parse(token).map_err(|source| GenerateError::Mapping {
        column: name.to_string(),
        source,
    })
}

pub(crate) fn modifiers(column: &Value) -> TypeModifiers {
    TypeModifiers::from_column(column)
}
