use serde_json::{json, Value};

use tablespec_core::Severity;
use tablespec_expectations::{
    extract_regex_patterns, extract_strftime_formats, extract_validation_rules,
    extract_value_sets,
};

fn sample_suite() -> Value {
    json!({
        "name": "Medical_Claims_suite",
        "expectations": [
            {
                "type": "expect_table_row_count_to_be_between",
                "kwargs": {"min_value": 1, "max_value": 500000},
                "meta": {"description": "Claims file row bounds", "severity": "critical"}
            },
            {
                "type": "expect_column_values_to_not_be_null",
                "kwargs": {"column": "claim_id"},
                "meta": {"severity": "critical"}
            },
            {
                "type": "expect_column_values_to_be_unique",
                "kwargs": {"column": "claim_id"},
                "meta": {"severity": "warning"}
            },
            {
                "type": "expect_column_value_lengths_to_be_between",
                "kwargs": {"column": "claim_id", "max_value": 50}
            },
            {
                "type": "expect_column_values_to_be_in_set",
                "kwargs": {"column": "lob", "value_set": ["MD", "MP", "ME"]},
                "meta": {"severity": "info"}
            },
            {
                "type": "expect_column_values_to_match_regex",
                "kwargs": {"column": "state", "regex": "^[A-Z]{2}$"}
            },
            {
                "type": "expect_column_values_to_match_strftime_format",
                "kwargs": {"column": "service_date", "strftime_format": "%Y%m%d"}
            }
        ]
    })
}

#[test]
fn recognized_records_map_to_rule_types() {
    let extraction = extract_validation_rules(&sample_suite());
    assert!(extraction.issues.is_empty());
    assert_eq!(extraction.rule_count(), 7);

    let table_level = extraction.rules.table_level.as_ref().expect("table rules");
    assert_eq!(table_level.len(), 1);
    assert_eq!(table_level[0].rule_type, "row_count");
    assert_eq!(table_level[0].severity, Severity::Error);
    assert_eq!(table_level[0].description, "Claims file row bounds");
    assert_eq!(
        table_level[0].parameters,
        Some(json!({"min_value": 1, "max_value": 500000}))
    );

    let column_level = extraction
        .rules
        .column_level
        .as_ref()
        .expect("column rules");
    let claim_rules = &column_level["claim_id"];
    let claim_types: Vec<&str> = claim_rules
        .iter()
        .map(|rule| rule.rule_type.as_str())
        .collect();
    assert_eq!(claim_types, ["not_null", "uniqueness", "length"]);

    // uniqueness carries no parameters; column key is not duplicated inside
    assert_eq!(claim_rules[1].parameters, None);
    assert_eq!(claim_rules[2].parameters, Some(json!({"max_value": 50})));
}

#[test]
fn severity_vocabulary_is_collapsed() {
    let extraction = extract_validation_rules(&sample_suite());
    let column_level = extraction
        .rules
        .column_level
        .as_ref()
        .expect("column rules");

    // critical -> error; warning, info, absent -> warning
    assert_eq!(column_level["claim_id"][0].severity, Severity::Error);
    assert_eq!(column_level["claim_id"][1].severity, Severity::Warning);
    assert_eq!(column_level["lob"][0].severity, Severity::Warning);
    assert_eq!(column_level["state"][0].severity, Severity::Warning);
}

#[test]
fn unknown_identifiers_pass_through_verbatim() {
    let suite = json!({
        "expectations": [
            {
                "type": "expect_column_pair_values_to_be_equal",
                "kwargs": {"column_A": "billed", "column_B": "allowed"}
            },
            {
                "type": "expect_custom_member_check",
                "kwargs": {"column": "member_id", "threshold": 0.9}
            }
        ]
    });

    let extraction = extract_validation_rules(&suite);
    assert!(extraction.issues.is_empty());
    assert_eq!(extraction.rule_count(), 2);

    let table_level = extraction.rules.table_level.as_ref().expect("table rules");
    assert_eq!(table_level[0].rule_type, "expect_column_pair_values_to_be_equal");
    assert_eq!(
        table_level[0].parameters,
        Some(json!({"column_A": "billed", "column_B": "allowed"}))
    );

    let column_level = extraction
        .rules
        .column_level
        .as_ref()
        .expect("column rules");
    let custom = &column_level["member_id"][0];
    assert_eq!(custom.rule_type, "expect_custom_member_check");
    // passthrough keeps kwargs verbatim, including the column key
    assert_eq!(
        custom.parameters,
        Some(json!({"column": "member_id", "threshold": 0.9}))
    );
}

#[test]
fn malformed_records_become_issues_without_aborting() {
    let suite = json!({
        "expectations": [
            {"type": "expect_column_values_to_not_be_null", "kwargs": {"column": "claim_id"}},
            "not a mapping",
            {"kwargs": {"column": "claim_id"}},
            {"type": "expect_column_values_to_not_be_null", "kwargs": {"column": 7}},
            {"type": "expect_column_to_exist", "kwargs": {}},
            {"type": "expect_column_values_to_be_unique", "kwargs": {"column": "member_id"}}
        ]
    });

    let extraction = extract_validation_rules(&suite);

    assert_eq!(extraction.rule_count(), 2);
    assert_eq!(extraction.issues.len(), 4);
    // every input record is accounted for
    assert_eq!(extraction.rule_count() + extraction.issues.len(), 6);

    let indices: Vec<usize> = extraction.issues.iter().map(|issue| issue.index).collect();
    assert_eq!(indices, [1, 2, 3, 4]);
    assert_eq!(
        extraction.issues[3].expectation_type.as_deref(),
        Some("expect_column_to_exist")
    );
}

#[test]
fn empty_or_absent_expectations_yield_empty_extraction() {
    let extraction = extract_validation_rules(&json!({"name": "suite"}));
    assert_eq!(extraction.rule_count(), 0);
    assert!(extraction.issues.is_empty());
    assert_eq!(extraction.rules.table_level, None);
    assert_eq!(extraction.rules.column_level, None);
}

#[test]
fn value_sets_are_collected_and_stringified() {
    let suite = json!({
        "expectations": [
            {
                "type": "expect_column_values_to_be_in_set",
                "kwargs": {"column": "lob", "value_set": ["MD", "MP", "ME"]}
            },
            {
                "type": "expect_column_values_to_be_in_set",
                "kwargs": {"column": "plan_tier", "value_set": [1, 2, 3]}
            }
        ]
    });

    let value_sets = extract_value_sets(&suite);
    assert_eq!(value_sets["lob"], vec!["MD", "MP", "ME"]);
    assert_eq!(value_sets["plan_tier"], vec!["1", "2", "3"]);
}

#[test]
fn regex_and_strftime_helpers_index_by_column() {
    let suite = sample_suite();
    assert_eq!(extract_regex_patterns(&suite)["state"], "^[A-Z]{2}$");
    assert_eq!(extract_strftime_formats(&suite)["service_date"], "%Y%m%d");
    assert!(extract_regex_patterns(&suite).get("claim_id").is_none());
}
