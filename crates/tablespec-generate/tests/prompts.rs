use serde_json::json;

use tablespec_generate::{documentation_prompt, has_validation_rule_hints};

#[test]
fn documentation_prompt_covers_every_column() {
    let document = json!({
        "table_name": "Member_Roster",
        "source_file": "roster_layout.xlsx",
        "description": "Monthly member roster",
        "columns": [
            {
                "name": "member_id",
                "data_type": "VARCHAR",
                "length": 30,
                "description": "Unique member identifier",
                "nullable": {"MD": false, "MP": false, "ME": false},
                "sample_values": ["M001", "M002"]
            },
            {"name": "birth_date", "data_type": "DATE"}
        ]
    });

    let prompt = documentation_prompt(&document).expect("generate");
    assert!(prompt.contains("# Documentation Generation Prompt for Member_Roster"));
    assert!(prompt.contains("### member_id"));
    assert!(prompt.contains("- **Max Length**: 30"));
    assert!(prompt.contains("- **Nullable**: False"));
    assert!(prompt.contains("### birth_date"));
    assert!(prompt.contains("- **Nullable**: True"));
    assert!(prompt.contains("## Analysis Request"));
}

#[test]
fn hints_found_in_column_descriptions() {
    let document = json!({
        "table_name": "Member_Roster",
        "columns": [
            {
                "name": "state",
                "data_type": "CHAR",
                "length": 2,
                "description": "Must be a 2-character state code"
            }
        ]
    });
    assert!(has_validation_rule_hints(&document));
}

#[test]
fn no_hints_in_plain_descriptions() {
    let document = json!({
        "table_name": "Member_Roster",
        "description": "Monthly roster",
        "columns": [
            {"name": "first_name", "data_type": "TEXT", "description": "Given name"}
        ]
    });
    assert!(!has_validation_rule_hints(&document));
}
