//! Array validation.
//!
//! This module provides [`ArraySchema`] for validating arrays whose elements
//! all share one shape.

use serde_json::Value;
use stillwater::Validation;

use crate::error::ParseError;
use crate::kind::ValueKind;
use crate::result::ParseResult;
use crate::validation::ValidationContext;

use super::traits::Validator;

/// A validator for homogeneous arrays.
///
/// Elements are validated in index order starting at 0. Validation stops at
/// the first failing element, whose error is returned with `[index]`
/// prepended to its path. On success the output has the same length and
/// order as the input.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::array(Schema::number());
///
/// let items = schema.validate(&json!([1, 2, 3])).into_result().unwrap();
/// assert_eq!(items.len(), 3);
///
/// let error = schema.validate(&json!([1, "two", "three"])).into_result().unwrap_err();
/// assert_eq!(error.path.to_string(), "[1]");
/// ```
#[derive(Debug, Clone)]
pub struct ArraySchema<S> {
    item_schema: S,
}

impl<S: Validator> ArraySchema<S> {
    /// Creates a new array validator with the given element validator.
    pub fn new(item_schema: S) -> Self {
        Self { item_schema }
    }

    /// Returns the element validator.
    pub fn item_schema(&self) -> &S {
        &self.item_schema
    }
}

/// Runs `validate_item` over the elements of an array input, fail-fast.
fn validate_items<T, F>(
    input: Option<&Value>,
    context: &ValidationContext,
    mut validate_item: F,
) -> ParseResult<Vec<T>>
where
    F: FnMut(&Value, &ValidationContext) -> ParseResult<T>,
{
    let items = match input {
        Some(Value::Array(items)) => items,
        other => {
            return Validation::Failure(ParseError::invalid_type(
                "array",
                ValueKind::of(other),
            ))
        }
    };

    if items.is_empty() {
        return Validation::Success(Vec::new());
    }

    let child = match context.descend() {
        Ok(child) => child,
        Err(error) => return Validation::Failure(error),
    };

    let mut validated = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match validate_item(item, &child) {
            Validation::Success(value) => validated.push(value),
            Validation::Failure(error) => {
                return Validation::Failure(error.prefixed_with_index(index))
            }
        }
    }

    Validation::Success(validated)
}

impl<S: Validator> Validator for ArraySchema<S> {
    type Output = Vec<S::Output>;

    fn validate_input(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Vec<S::Output>> {
        validate_items(input, context, |item, child| {
            self.item_schema.validate_input(Some(item), child)
        })
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        validate_items(input, context, |item, child| {
            self.item_schema
                .validate_input_to_value(Some(item), child)
                .map(|value| value.unwrap_or(Value::Null))
        })
        .map(|items| Some(Value::Array(items)))
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        self.item_schema.collect_refs(refs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::schema::Schema;
    use serde_json::json;

    #[test]
    fn test_empty_array_succeeds() {
        let schema = Schema::array(Schema::exact("never"));
        let result = schema.validate(&json!([])).into_result().unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_non_array_rejected_at_root() {
        let error = Schema::array(Schema::number())
            .validate(&json!({"0": 1}))
            .into_result()
            .unwrap_err();
        assert_eq!(error.message, "expected array, got object");
        assert!(error.path.is_root());
    }

    #[test]
    fn test_first_failing_index_wins() {
        let schema = Schema::array(Schema::string());
        let error = schema
            .validate(&json!(["ok", 1, 2]))
            .into_result()
            .unwrap_err();
        assert_eq!(error.path.to_string(), "[1]");
    }

    #[test]
    fn test_index_composes_with_nested_path() {
        let schema = Schema::array(Schema::object().field("id", Schema::number()));
        let error = schema
            .validate(&json!([{"id": 1}, {"id": 2}, {"id": "3"}]))
            .into_result()
            .unwrap_err();
        assert_eq!(error.path.to_string(), "[2].id");
    }

    #[test]
    fn test_value_view_preserves_order_and_extra_keys() {
        let schema = Schema::array(Schema::object().field("id", Schema::number()));
        let input = json!([{"id": 2, "x": true}, {"id": 1}]);
        let result = schema.validate_value(&input).into_result().unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn test_depth_limit_applies_to_nested_arrays() {
        let schema = Schema::array(Schema::array(Schema::array(Schema::number())));
        let context = ValidationContext::new().with_max_depth(2);

        let error = schema
            .validate_with(&json!([[[1]]]), &context)
            .into_result()
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::TooDeep);
        assert_eq!(error.path.to_string(), "[0][0]");

        assert!(schema.validate_with(&json!([[[]]]), &context).is_success());
    }
}
