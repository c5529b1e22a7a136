//! Property tests for validator laws.

use proptest::prelude::*;
use serde_json::{Map, Value};
use shapeguard::{Schema, Validator, ValidatorExt};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-c]{0,3}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-c]{1,2}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

/// A validator exercising every combinator.
fn mixed_schema() -> impl Validator {
    Schema::object()
        .field("a", Schema::string().or(Schema::number()))
        .field("b", Schema::array(Schema::boolean().nullable()).optional())
        .field(
            "c",
            Schema::discriminated_union()
                .variant("aa", Schema::object().field("b", Schema::any()))
                .variant("bb", Schema::object())
                .optional(),
        )
}

proptest! {
    #[test]
    fn prop_validated_value_validates_again_unchanged(value in arb_json()) {
        let schema = mixed_schema();
        if let Ok(validated) = schema.validate_value(&value).into_result() {
            let again = schema.validate_value(&validated).into_result();
            prop_assert_eq!(again, Ok(validated));
        }
    }

    #[test]
    fn prop_records_keep_unnamed_keys(value in arb_json()) {
        let schema = Schema::object().field("a", Schema::any().optional());
        if let (Value::Object(input), Ok(Value::Object(output))) =
            (&value, schema.validate_value(&value).into_result())
        {
            prop_assert_eq!(input, &output);
        }
    }

    #[test]
    fn prop_array_error_index_is_first_mismatch(items in prop::collection::vec(arb_json(), 1..8)) {
        let schema = Schema::array(Schema::string());
        let first_bad = items.iter().position(|item| !item.is_string());
        let result = schema.validate(&Value::Array(items)).into_result();

        match first_bad {
            None => prop_assert!(result.is_ok()),
            Some(index) => {
                let error = result.unwrap_err();
                prop_assert_eq!(error.path.to_string(), format!("[{}]", index));
            }
        }
    }

    #[test]
    fn prop_or_accepts_union_of_languages(value in arb_json()) {
        let either = Schema::string().or(Schema::boolean());
        let expected = value.is_string() || value.is_boolean();
        prop_assert_eq!(either.validate(&value).is_success(), expected);
    }

    #[test]
    fn prop_field_errors_are_prefixed(key in "[a-z]{1,8}", value in arb_json()) {
        let inner = Schema::number();
        let outer = Schema::object().field(key.clone(), Schema::number());
        let mut fields = Map::new();
        fields.insert(key.clone(), value.clone());
        let input = Value::Object(fields);

        match (inner.validate(&value).into_result(), outer.validate(&input).into_result()) {
            (Ok(_), Ok(_)) => {}
            (Err(inner_error), Err(outer_error)) => {
                prop_assert_eq!(outer_error.message, inner_error.message);
                prop_assert_eq!(outer_error.path.to_string(), format!(".{}", key));
            }
            (inner, outer) => prop_assert!(false, "disagree: {:?} vs {:?}", inner, outer),
        }
    }
}
