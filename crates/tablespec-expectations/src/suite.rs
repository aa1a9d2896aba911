use schemars::schema::RootSchema;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single declarative data-quality expectation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Expectation {
    /// Engine rule identifier (e.g. `expect_column_to_exist`).
    #[serde(rename = "type")]
    pub expectation_type: String,
    /// Rule parameters; shape depends on the identifier.
    pub kwargs: Map<String, Value>,
    /// Advisory metadata: description, severity, provenance.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
}

/// Expectation suite document for a single table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExpectationSuite {
    pub name: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
    pub expectations: Vec<Expectation>,
}

impl ExpectationSuite {
    /// Plain-mapping projection of the suite.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Emit the JSON Schema for expectation suite documents.
pub fn suite_json_schema() -> RootSchema {
    schema_for!(ExpectationSuite)
}
