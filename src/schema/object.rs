//! Object and record validation.
//!
//! This module provides [`ObjectSchema`]. With no fields it is the plain
//! object category check; each [`field`](ObjectSchema::field) turns it into a
//! record validator that checks the named properties in declaration order.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::Validation;

use crate::error::ParseError;
use crate::kind::ValueKind;
use crate::result::ParseResult;
use crate::validation::ValidationContext;

use super::traits::{Validator, ValueValidator};

/// A validator for JSON objects and their declared fields.
///
/// Validation runs in three steps:
/// 1. the input must be of the object category: a JSON object or an array
///    (`null` is rejected with `expected object, got null`);
/// 2. each declared field is validated in declaration order, a missing
///    property being passed to the field validator as absent; the first
///    failure is returned with `.field` prepended to its path;
/// 3. the output is an object holding the input's own properties with the
///    validated field values written over them, so properties the schema
///    does not name pass through unchanged.
///
/// The own properties of an array are its elements keyed by index (`"0"`,
/// `"1"`, ...). Without declared fields the input is returned as-is.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("a", Schema::string())
///     .field("b", Schema::number());
///
/// let error = schema
///     .validate(&json!({"a": "x", "b": "y"}))
///     .into_result()
///     .unwrap_err();
/// assert_eq!(error.path.to_string(), ".b");
/// assert_eq!(error.message, "expected number, got string");
/// ```
#[derive(Default)]
pub struct ObjectSchema {
    fields: IndexMap<String, Box<dyn ValueValidator>>,
}

impl ObjectSchema {
    /// Creates an object validator with no declared fields.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Declares a field and the validator for its value.
    ///
    /// Fields are checked in the order they are declared. Declaring the same
    /// name twice replaces the validator but keeps the original position.
    ///
    /// A field is required unless its validator accepts an absent value,
    /// e.g. [`Schema::optional`](super::Schema::optional).
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapeguard::{Schema, Validator};
    /// use serde_json::json;
    ///
    /// let schema = Schema::object()
    ///     .field("name", Schema::string())
    ///     .field("nickname", Schema::optional(Schema::string()));
    ///
    /// assert!(schema.validate(&json!({"name": "Ada"})).is_success());
    ///
    /// let error = schema.validate(&json!({})).into_result().unwrap_err();
    /// assert_eq!(error.to_string(), ".name: expected string, got undefined");
    /// ```
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: ValueValidator + 'static,
    {
        self.fields.insert(name.into(), Box::new(schema));
        self
    }

    /// Returns the declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    fn validate_object(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Value> {
        let input = match input {
            Some(value @ (Value::Object(_) | Value::Array(_))) => value,
            other => {
                return Validation::Failure(ParseError::invalid_type(
                    "object",
                    ValueKind::of(other),
                ))
            }
        };

        if self.fields.is_empty() {
            return Validation::Success(input.clone());
        }

        let child = match context.descend() {
            Ok(child) => child,
            Err(error) => return Validation::Failure(error),
        };

        let source = own_properties(input);
        let mut merged = source.clone();
        for (name, validator) in &self.fields {
            match validator.validate_value_input(source.get(name), &child) {
                Validation::Success(Some(value)) => {
                    merged.insert(name.clone(), value);
                }
                // absent results add nothing
                Validation::Success(None) => {}
                Validation::Failure(error) => {
                    return Validation::Failure(error.prefixed_with_key(name.as_str()))
                }
            }
        }

        Validation::Success(Value::Object(merged))
    }
}

/// Returns the own properties of an object-category value.
///
/// An array's properties are its elements keyed by decimal index.
fn own_properties(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(object) => object.clone(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item.clone()))
            .collect(),
        _ => Map::new(),
    }
}

impl Validator for ObjectSchema {
    type Output = Value;

    fn validate_input(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Value> {
        self.validate_object(input, context)
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        self.validate_object(input, context).map(Some)
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        for validator in self.fields.values() {
            validator.collect_value_refs(refs);
        }
    }
}
