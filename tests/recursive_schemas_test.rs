//! Tests for recursive schema structures and depth tracking.

use serde_json::json;
use shapeguard::{ErrorKind, Schema, SchemaRegistry, ValidatorExt};

fn build_nested(depth: usize) -> serde_json::Value {
    if depth == 0 {
        json!({ "value": depth })
    } else {
        json!({
            "value": depth,
            "next": build_nested(depth - 1)
        })
    }
}

fn linked_list(registry: &SchemaRegistry) {
    registry
        .register(
            "Node",
            Schema::object()
                .field("value", Schema::number())
                .field("next", Schema::ref_("Node").optional()),
        )
        .unwrap();
}

#[test]
fn test_self_referencing_schema() {
    let registry = SchemaRegistry::new();

    // Comment with optional replies that are comments themselves
    registry
        .register(
            "Comment",
            Schema::object()
                .field("text", Schema::string())
                .field("replies", Schema::array(Schema::ref_("Comment")).optional()),
        )
        .unwrap();

    let result = registry
        .validate(
            "Comment",
            &json!({
                "text": "Top comment",
                "replies": [
                    {"text": "Reply 1"},
                    {
                        "text": "Reply 2",
                        "replies": [{"text": "Nested reply"}]
                    }
                ]
            }),
        )
        .unwrap();
    assert!(result.is_success());

    let error = registry
        .validate(
            "Comment",
            &json!({
                "text": "Top comment",
                "replies": [{"text": "Reply", "replies": [{"text": false}]}]
            }),
        )
        .unwrap()
        .into_result()
        .unwrap_err();
    assert_eq!(error.path.to_string(), ".replies[0].replies[0].text");
}

#[test]
fn test_mutually_recursive_schemas() {
    let registry = SchemaRegistry::new();

    // A references B, B references A
    registry
        .register(
            "A",
            Schema::object()
                .field("name", Schema::string())
                .field("b", Schema::ref_("B").optional()),
        )
        .unwrap();
    registry
        .register(
            "B",
            Schema::object()
                .field("value", Schema::number())
                .field("a", Schema::ref_("A").optional()),
        )
        .unwrap();

    assert!(registry.validate_refs().is_empty());

    let result = registry
        .validate(
            "A",
            &json!({
                "name": "First A",
                "b": {
                    "value": 42,
                    "a": {"name": "Nested A"}
                }
            }),
        )
        .unwrap();
    assert!(result.is_success());
}

#[test]
fn test_depth_limit_enforcement() {
    let registry = SchemaRegistry::new().with_max_depth(8);
    linked_list(&registry);

    // Shallow nesting should succeed
    let result = registry.validate("Node", &build_nested(2)).unwrap();
    assert!(result.is_success());

    // Very deep nesting fails instead of recursing without bound
    let error = registry
        .validate("Node", &build_nested(20))
        .unwrap()
        .into_result()
        .unwrap_err();
    assert_eq!(error.kind, ErrorKind::TooDeep);
    assert!(error.path.to_string().starts_with(".next.next"));
}

#[test]
fn test_default_depth_accepts_moderate_nesting() {
    let registry = SchemaRegistry::new();
    linked_list(&registry);

    let result = registry.validate("Node", &build_nested(40)).unwrap();
    assert!(result.is_success());
}

#[test]
fn test_self_reference_without_data_recursion_terminates() {
    let registry = SchemaRegistry::new();

    // A reference cycle with no object in between recurses on the same
    // value until the depth limit stops it.
    registry.register("Loop", Schema::ref_("Loop")).unwrap();

    let error = registry
        .validate("Loop", &json!(1))
        .unwrap()
        .into_result()
        .unwrap_err();
    assert_eq!(error.kind, ErrorKind::TooDeep);
    assert!(error.path.is_root());
}
