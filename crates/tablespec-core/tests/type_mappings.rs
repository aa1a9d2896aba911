use tablespec_core::{
    expectation_type, json_schema_type, spark_type, DataType, SparkType, TypeMappingError,
    TypeModifiers,
};

fn varchar_mods(length: u32) -> TypeModifiers {
    TypeModifiers {
        length: Some(length),
        ..TypeModifiers::default()
    }
}

fn decimal_mods(precision: u32, scale: Option<u32>) -> TypeModifiers {
    TypeModifiers {
        precision: Some(precision),
        scale,
        ..TypeModifiers::default()
    }
}

fn modifiers_for(data_type: DataType) -> TypeModifiers {
    match data_type {
        DataType::Varchar | DataType::Char => varchar_mods(50),
        DataType::Decimal => decimal_mods(10, Some(2)),
        _ => TypeModifiers::default(),
    }
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(DataType::parse("varchar").expect("parse"), DataType::Varchar);
    assert_eq!(DataType::parse("Integer").expect("parse"), DataType::Integer);
    assert_eq!(
        DataType::parse("DATETIME").expect("parse"),
        DataType::DateTime
    );
}

#[test]
fn parse_rejects_unknown_tokens() {
    match DataType::parse("BIGINT") {
        Err(TypeMappingError::UnknownType { name }) => assert_eq!(name, "BIGINT"),
        other => panic!("expected unknown type error, got {other:?}"),
    }
}

#[test]
fn spark_mapping_is_total_over_all_types() {
    let expected = [
        (DataType::Varchar, "StringType"),
        (DataType::Char, "StringType"),
        (DataType::Text, "StringType"),
        (DataType::Integer, "IntegerType"),
        (DataType::Decimal, "DecimalType"),
        (DataType::Float, "FloatType"),
        (DataType::Date, "DateType"),
        (DataType::DateTime, "TimestampType"),
        (DataType::Boolean, "BooleanType"),
    ];
    for (data_type, token) in expected {
        let mapped = spark_type(data_type, &modifiers_for(data_type)).expect("total mapping");
        assert_eq!(mapped.name(), token, "{data_type}");
    }
}

#[test]
fn decimal_spark_type_carries_precision_and_scale() {
    let mapped = spark_type(DataType::Decimal, &decimal_mods(10, Some(2))).expect("mapping");
    assert_eq!(
        mapped,
        SparkType::Decimal {
            precision: 10,
            scale: 2
        }
    );
    assert_eq!(mapped.render(), "DecimalType(10,2)");
}

#[test]
fn decimal_scale_defaults_to_zero() {
    let mapped = spark_type(DataType::Decimal, &decimal_mods(8, None)).expect("mapping");
    assert_eq!(
        mapped,
        SparkType::Decimal {
            precision: 8,
            scale: 0
        }
    );
}

#[test]
fn decimal_without_precision_fails_loudly() {
    match spark_type(DataType::Decimal, &TypeModifiers::default()) {
        Err(TypeMappingError::MissingModifier {
            data_type,
            modifier,
        }) => {
            assert_eq!(data_type, "DECIMAL");
            assert_eq!(modifier, "precision");
        }
        other => panic!("expected missing modifier error, got {other:?}"),
    }
}

#[test]
fn json_mapping_is_total_over_all_types() {
    for data_type in DataType::ALL {
        let fragment =
            json_schema_type(data_type, &modifiers_for(data_type)).expect("total mapping");
        assert!(fragment.get("type").is_some(), "{data_type}");
    }
}

#[test]
fn varchar_json_mapping_carries_max_length() {
    let fragment = json_schema_type(DataType::Varchar, &varchar_mods(50)).expect("mapping");
    assert_eq!(
        fragment,
        serde_json::json!({"type": "string", "maxLength": 50})
    );
}

#[test]
fn varchar_json_mapping_without_length_fails_loudly() {
    match json_schema_type(DataType::Varchar, &TypeModifiers::default()) {
        Err(TypeMappingError::MissingModifier {
            data_type,
            modifier,
        }) => {
            assert_eq!(data_type, "VARCHAR");
            assert_eq!(modifier, "length");
        }
        other => panic!("expected missing modifier error, got {other:?}"),
    }
}

#[test]
fn decimal_json_mapping_is_plain_number() {
    let fragment = json_schema_type(DataType::Decimal, &decimal_mods(10, Some(2))).expect("mapping");
    assert_eq!(fragment, serde_json::json!({"type": "number"}));
}

#[test]
fn expectation_mapping_is_total_over_all_types() {
    let expected = [
        (DataType::Varchar, "StringType"),
        (DataType::Char, "StringType"),
        (DataType::Text, "StringType"),
        (DataType::Integer, "IntegerType"),
        (DataType::Decimal, "DecimalType"),
        (DataType::Float, "FloatType"),
        (DataType::Date, "DateType"),
        (DataType::DateTime, "TimestampType"),
        (DataType::Boolean, "BooleanType"),
    ];
    for (data_type, token) in expected {
        assert_eq!(expectation_type(data_type), token, "{data_type}");
    }
}

#[test]
fn mappings_are_deterministic() {
    for data_type in DataType::ALL {
        let modifiers = modifiers_for(data_type);
        assert_eq!(
            spark_type(data_type, &modifiers).expect("first"),
            spark_type(data_type, &modifiers).expect("second")
        );
        assert_eq!(
            json_schema_type(data_type, &modifiers).expect("first"),
            json_schema_type(data_type, &modifiers).expect("second")
        );
    }
}
