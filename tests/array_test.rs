//! Integration tests for array validation.

use serde_json::json;
use shapeguard::{ErrorKind, ParseError, Schema, ValidationContext, Validator, ValidatorExt};

/// Helper to extract the success value from a Validation
fn unwrap_success<T, E: std::fmt::Debug>(v: stillwater::Validation<T, E>) -> T {
    v.into_result().unwrap()
}

/// Helper to extract the error value from a Validation
fn unwrap_failure<T: std::fmt::Debug>(v: stillwater::Validation<T, ParseError>) -> ParseError {
    v.into_result().unwrap_err()
}

#[test]
fn test_array_of_strings() {
    let schema = Schema::array(Schema::string());

    let items = unwrap_success(schema.validate(&json!(["hello", "world"])));
    assert_eq!(items, vec!["hello".to_string(), "world".to_string()]);
}

#[test]
fn test_array_rejects_non_arrays() {
    let schema = Schema::array(Schema::number());

    let error = unwrap_failure(schema.validate(&json!({"0": 1})));
    assert_eq!(error.message, "expected array, got object");
    assert!(error.path.is_root());

    let error = unwrap_failure(schema.validate(&json!("1,2")));
    assert_eq!(error.message, "expected array, got string");
}

#[test]
fn test_first_failing_index_is_reported() {
    let schema = Schema::array(Schema::number());

    let error = unwrap_failure(schema.validate(&json!([1, "2", "3"])));
    assert_eq!(error.path.to_string(), "[1]");
    assert_eq!(error.message, "expected number, got string");
}

#[test]
fn test_nested_arrays_report_full_path() {
    let schema = Schema::array(Schema::array(Schema::boolean()));

    let error = unwrap_failure(schema.validate(&json!([[true], [false, null]])));
    assert_eq!(error.path.to_string(), "[1][1]");
}

#[test]
fn test_array_of_records_path() {
    let schema = Schema::array(Schema::object().field("id", Schema::number()));

    let error = unwrap_failure(schema.validate(&json!([{"id": 1}, {}])));
    assert_eq!(error.to_string(), "[1].id: expected number, got undefined");
}

#[test]
fn test_null_elements_need_nullable_items() {
    let strict = Schema::array(Schema::string());
    assert!(strict.validate(&json!(["a", null])).is_failure());

    let lenient = Schema::array(Schema::string().nullable());
    let items = unwrap_success(lenient.validate(&json!(["a", null])));
    assert_eq!(items, vec![Some("a".to_string()), None]);
}

#[test]
fn test_value_view_keeps_element_values() {
    let schema = Schema::array(Schema::object().field("id", Schema::number()));

    let value = unwrap_success(schema.validate_value(&json!([{"id": 1, "extra": true}])));
    assert_eq!(value, json!([{"id": 1, "extra": true}]));
}

#[test]
fn test_depth_limit_applies_to_arrays() {
    let schema = Schema::array(Schema::array(Schema::array(Schema::number())));
    let context = ValidationContext::new().with_max_depth(2);

    let error = unwrap_failure(schema.validate_with(&json!([[[1]]]), &context));
    assert_eq!(error.kind, ErrorKind::TooDeep);
    assert_eq!(error.path.to_string(), "[0][0]");

    // Empty arrays never descend.
    assert!(schema.validate_with(&json!([[[]]]), &context).is_success());
}
