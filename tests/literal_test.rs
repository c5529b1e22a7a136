//! Integration tests for exact, one-of and key-of validators.

use serde_json::json;
use shapeguard::{ErrorKind, Schema, Validator};

#[test]
fn test_exact_matches_by_json_equality() {
    let schema = Schema::exact(1);

    assert!(schema.validate(&json!(1)).is_success());
    assert!(schema.validate(&json!(1.0)).is_success());
    assert!(schema.validate(&json!("1")).is_failure());
    assert!(schema.validate(&json!(true)).is_failure());
}

#[test]
fn test_exact_null() {
    let schema = Schema::exact(serde_json::Value::Null);

    assert!(schema.validate(&json!(null)).is_success());

    let error = schema.validate(&json!(0)).into_result().unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidValue);
    assert_eq!(error.message, "expected null, got 0");
}

#[test]
fn test_exact_structured_value() {
    let schema = Schema::exact(json!({"v": [1, 2]}));

    assert!(schema.validate(&json!({"v": [1, 2]})).is_success());
    assert!(schema.validate(&json!({"v": [2, 1]})).is_failure());
}

#[test]
fn test_one_of_membership() {
    let schema = Schema::one_of([json!("a"), json!(2), json!(null)]);

    assert!(schema.validate(&json!("a")).is_success());
    assert!(schema.validate(&json!(2)).is_success());
    assert!(schema.validate(&json!(null)).is_success());

    let error = schema.validate(&json!("b")).into_result().unwrap_err();
    assert_eq!(error.message, r#"unexpected value "b", expected one of "a", 2, null"#);
}

#[test]
fn test_one_of_empty_rejects_everything() {
    let schema = Schema::one_of(Vec::<serde_json::Value>::new());
    assert!(schema.validate(&json!(null)).is_failure());
}

#[test]
fn test_key_of_requires_known_string() {
    let schema = Schema::key_of(["foo", "bar"]);

    assert_eq!(schema.validate(&json!("bar")).into_result().unwrap(), "bar");
    assert!(schema.contains("foo"));
    assert!(!schema.contains("baz"));

    let error = schema.validate(&json!("baz")).into_result().unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidValue);

    let error = schema.validate(&json!(null)).into_result().unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidType);
    assert_eq!(error.message, "expected string, got null");
}
