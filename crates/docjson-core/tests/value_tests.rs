use std::collections::BTreeMap;

use docjson_core::{TypeMismatch, Value, ValueKind};

// ============================================================================
// Predicates
// ============================================================================

#[test]
fn predicates_match_variant() {
    assert!(Value::Null.is_null());
    assert!(Value::Array(vec![]).is_array());
    assert!(Value::Object(BTreeMap::new()).is_object());
    assert!(Value::Bool(false).is_bool());
    assert!(Value::Integer(1).is_integer());
    assert!(Value::Float(1.5).is_float());
    assert!(Value::String(String::new()).is_string());

    assert!(!Value::Null.is_array());
    assert!(!Value::Integer(1).is_float());
    assert!(!Value::Float(1.0).is_integer());
    assert!(!Value::String("1".into()).is_number());
}

#[test]
fn is_number_accepts_integer_and_float() {
    assert!(Value::Integer(5).is_number());
    assert!(Value::Float(5.5).is_number());
    assert!(!Value::Bool(true).is_number());
    assert!(!Value::Null.is_number());
}

#[test]
fn default_is_null() {
    assert_eq!(Value::default(), Value::Null);
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn as_array_on_bool_is_type_mismatch() {
    let err = Value::Bool(true).as_array().unwrap_err();
    assert_eq!(
        err,
        TypeMismatch {
            expected: ValueKind::Array,
            found: ValueKind::Bool,
        }
    );
    assert_eq!(err.to_string(), "value is boolean, not array");
}

#[test]
fn as_double_widens_integer() {
    let value = Value::Integer(5);
    assert_eq!(value.as_double().unwrap(), 5.0);
    // Reading as a float does not change the stored variant.
    assert!(value.is_integer());
    assert_eq!(value.as_integer().unwrap(), 5);
}

#[test]
fn as_double_on_float() {
    assert_eq!(Value::Float(-2.25).as_double().unwrap(), -2.25);
}

#[test]
fn as_double_on_string_reports_number() {
    let err = Value::from("5").as_double().unwrap_err();
    assert_eq!(err.expected, ValueKind::Number);
    assert_eq!(err.found, ValueKind::String);
}

#[test]
fn as_integer_on_float_is_type_mismatch() {
    let err = Value::Float(5.0).as_integer().unwrap_err();
    assert_eq!(err.expected, ValueKind::Integer);
    assert_eq!(err.found, ValueKind::Float);
}

#[test]
fn typed_accessors_return_payload() {
    assert!(Value::Bool(true).as_bool().unwrap());
    assert_eq!(Value::Integer(-3).as_integer().unwrap(), -3);
    assert_eq!(Value::from("hi").as_str().unwrap(), "hi");
    assert_eq!(
        Value::from(vec![Value::Null]).as_array().unwrap(),
        &vec![Value::Null]
    );

    let object: Value = [("k", Value::Integer(1))].into_iter().collect();
    assert_eq!(object.as_object().unwrap()["k"], Value::Integer(1));
}

#[test]
fn accessor_errors_name_actual_kind() {
    let cases = [
        (Value::Null, ValueKind::Null),
        (Value::Array(vec![]), ValueKind::Array),
        (Value::Object(BTreeMap::new()), ValueKind::Object),
        (Value::Integer(0), ValueKind::Integer),
        (Value::Float(0.0), ValueKind::Float),
    ];
    for (value, kind) in cases {
        assert_eq!(value.kind(), kind);
        assert_eq!(value.as_str().unwrap_err().found, kind);
    }
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn integer_and_float_are_distinct() {
    assert_ne!(Value::Integer(1), Value::Float(1.0));
}

#[test]
fn arrays_compare_in_order() {
    let a = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
    let b = Value::from(vec![Value::Integer(2), Value::Integer(1)]);
    assert_ne!(a, b);
    assert_eq!(a.clone(), a);
}

#[test]
fn objects_compare_independent_of_insertion_order() {
    let a: Value = [("x", Value::Integer(1)), ("y", Value::Bool(true))]
        .into_iter()
        .collect();
    let b: Value = [("y", Value::Bool(true)), ("x", Value::Integer(1))]
        .into_iter()
        .collect();
    assert_eq!(a, b);
}

#[test]
fn objects_with_different_values_differ() {
    let a: Value = [("x", Value::Integer(1))].into_iter().collect();
    let b: Value = [("x", Value::Integer(2))].into_iter().collect();
    assert_ne!(a, b);
}

#[test]
fn collecting_pairs_keeps_last_duplicate() {
    let value: Value = [("a", Value::Integer(1)), ("a", Value::Integer(2))]
        .into_iter()
        .collect();
    let members = value.as_object().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members["a"], Value::Integer(2));
}

// ============================================================================
// Conversions
// ============================================================================

#[test]
fn from_impls_pick_variant() {
    assert_eq!(Value::from(()), Value::Null);
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7), Value::Integer(7));
    assert_eq!(Value::from(0.5), Value::Float(0.5));
    assert_eq!(Value::from(String::from("s")), Value::String("s".into()));
    assert_eq!(
        (1..=3i32).map(Value::from).collect::<Value>(),
        Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
    );
}

#[test]
fn from_serde_json_keeps_small_integers() {
    let value = Value::from(serde_json::json!({"i": -3, "big": 3_000_000_000u64, "f": 1.0}));
    let members = value.as_object().unwrap();
    assert_eq!(members["i"], Value::Integer(-3));
    assert_eq!(members["big"], Value::Float(3_000_000_000.0));
    assert_eq!(members["f"], Value::Float(1.0));
}

#[test]
fn from_serde_json_nested() {
    let value = Value::from(serde_json::json!([null, "s", [true], {"k": {}}]));
    let expected = Value::Array(vec![
        Value::Null,
        Value::from("s"),
        Value::Array(vec![Value::Bool(true)]),
        [("k", Value::Object(BTreeMap::new()))].into_iter().collect(),
    ]);
    assert_eq!(value, expected);
}

#[test]
fn serializes_compactly_with_sorted_keys() {
    let value: Value = [
        ("b", Value::from(vec![Value::Integer(1), Value::Float(2.5)])),
        ("a", Value::from("x\n")),
        ("c", Value::Null),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"a":"x\n","b":[1,2.5],"c":null}"#
    );
}
