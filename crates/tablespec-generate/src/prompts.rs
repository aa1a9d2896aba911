//! Prompt generation for downstream documentation and review tooling.
//!
//! Pure string templates over the document projection: string in, string
//! out, no I/O.

use serde_json::Value;

use tablespec_core::project as umf;

use crate::errors::Result;
use crate::project;

/// Indicator phrases that suggest a column description encodes a
/// validation rule worth reviewing.
const RULE_INDICATORS: &[&str] = &[
    "format",
    "pattern",
    "must be",
    "should be",
    "valid values",
    "allowed values",
    "values:",
    "range",
    "between",
    "greater than",
    "less than",
    "digit",
    "character",
    "length",
    "unique",
];

/// Generate a documentation-review prompt for a table specification.
pub fn documentation_prompt(document: &Value) -> Result<String> {
    let table_name = project::table_name(document)?;
    let columns = project::columns(document)?;
    let description = document
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Data table containing {} fields", columns.len()));
    let source = document
        .get("source_file")
        .and_then(Value::as_str)
        .unwrap_or("unspecified source");

    let mut prompt = format!(
        "# Documentation Generation Prompt for {table_name}\n\n\
         Please analyze the following data table specification and generate \
         comprehensive documentation.\n\n\
         ## Table Information\n\
         - **Name**: {table_name}\n\
         - **Source**: {source}\n\
         - **Description**: {description}\n\n\
         ## Column Specifications\n\n"
    );

    for column in columns {
        let name = project::column_name(column)?;
        let data_type = umf::data_type_token(column).unwrap_or("VARCHAR");
        prompt.push_str(&format!("### {name}\n"));
        prompt.push_str(&format!("- **Type**: {data_type}\n"));
        prompt.push_str(&format!(
            "- **Description**: {}\n",
            umf::description(column).unwrap_or("No description provided")
        ));

        let samples = umf::sample_values(column);
        if !samples.is_empty() {
            let preview = samples
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            prompt.push_str(&format!("- **Sample Values**: {preview}\n"));
        }

        prompt.push_str(&format!(
            "- **Nullable**: {}\n",
            if umf::is_required(column) {
                "False"
            } else {
                "True"
            }
        ));

        if let Some(length) = column.get("length").and_then(Value::as_u64) {
            prompt.push_str(&format!("- **Max Length**: {length}\n"));
        }
        prompt.push('\n');
    }

    prompt.push_str(
        "\n## Analysis Request\n\n\
         Based on this specification, please provide:\n\n\
         1. **Business Purpose**: What is the primary business purpose of this table?\n\
         2. **Data Flow**: How does this table fit into the data workflow?\n\
         3. **Key Relationships**: What other tables would this likely relate to?\n\
         4. **Data Quality Concerns**: What data quality issues should we watch for?\n\
         5. **Usage Patterns**: How would this table typically be queried or used?\n\n\
         Please provide your analysis in a structured format suitable for \
         technical documentation.\n",
    );

    Ok(prompt)
}

/// Check whether a document's free-text fields hint at validation rules
/// that deserve a generated review prompt.
pub fn has_validation_rule_hints(document: &Value) -> bool {
    if let Some(description) = document.get("description").and_then(Value::as_str)
        && contains_indicator(description)
    {
        return true;
    }

    let Some(columns) = umf::columns(document) else {
        return false;
    };

    for column in columns {
        if let Some(description) = umf::description(column)
            && contains_indicator(description)
        {
            return true;
        }

        // small sample sets read like enumerations
        let samples = umf::sample_values(column);
        if !samples.is_empty() && samples.len() <= 10 {
            let joined = samples.join(" ");
            if contains_indicator(&joined) {
                return true;
            }
        }
    }

    false
}

fn contains_indicator(text: &str) -> bool {
    let lowered = text.to_lowercase();
    RULE_INDICATORS
        .iter()
        .any(|indicator| lowered.contains(indicator))
}
