//! Discriminated unions.
//!
//! This module provides [`DiscriminatedUnion`], which picks a variant
//! validator by looking at a tag field of the input object.

use indexmap::IndexMap;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ErrorKind, ParseError};
use crate::kind::ValueKind;
use crate::result::ParseResult;
use crate::validation::ValidationContext;

use super::literal::unknown_key;
use super::traits::{Validator, ValueValidator};

/// Name of the tag field unless configured otherwise.
pub const DEFAULT_DISCRIMINANT: &str = "type";

/// A validator that dispatches on a tag field.
///
/// The input must be an object whose discriminant field (`type` unless
/// changed with [`discriminant`](Self::discriminant)) is a string naming one
/// of the declared variants. A missing, non-string or unknown tag fails at
/// the discriminant's path with [`ErrorKind::InvalidDiscriminant`]; an array
/// is an object with no tag and fails there too. Once the
/// tag matches, the whole object, tag included, is handed to that variant's
/// validator and its result is returned as-is.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, Validator};
/// use serde_json::json;
///
/// let shape = Schema::discriminated_union()
///     .variant("circle", Schema::object().field("radius", Schema::number()))
///     .variant(
///         "rect",
///         Schema::object()
///             .field("width", Schema::number())
///             .field("height", Schema::number()),
///     );
///
/// assert!(shape.validate(&json!({"type": "circle", "radius": 2})).is_success());
///
/// let error = shape
///     .validate(&json!({"type": "rect", "radius": 2}))
///     .into_result()
///     .unwrap_err();
/// assert_eq!(error.path.to_string(), ".width");
/// ```
pub struct DiscriminatedUnion {
    discriminant: String,
    variants: IndexMap<String, Box<dyn ValueValidator>>,
}

impl DiscriminatedUnion {
    /// Creates a union with no variants, dispatching on `type`.
    pub fn new() -> Self {
        Self {
            discriminant: DEFAULT_DISCRIMINANT.to_string(),
            variants: IndexMap::new(),
        }
    }

    /// Sets the name of the tag field.
    pub fn discriminant(mut self, field: impl Into<String>) -> Self {
        self.discriminant = field.into();
        self
    }

    /// Registers the validator used when the tag equals `tag`.
    pub fn variant<S>(mut self, tag: impl Into<String>, schema: S) -> Self
    where
        S: ValueValidator + 'static,
    {
        self.variants.insert(tag.into(), Box::new(schema));
        self
    }

    /// Returns the declared tags in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    fn dispatch(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        let tag = match input {
            Some(Value::Object(object)) => object.get(&self.discriminant),
            // arrays are objects without a discriminant
            Some(Value::Array(_)) => None,
            other => {
                return Validation::Failure(ParseError::invalid_type(
                    "object",
                    ValueKind::of(other),
                ))
            }
        };

        let variant = match tag {
            Some(Value::String(tag)) => match self.variants.get(tag.as_str()) {
                Some(variant) => variant,
                None => return self.reject_tag(unknown_key(tag, self.tags())),
            },
            other => {
                return self.reject_tag(ParseError::invalid_type("string", ValueKind::of(other)))
            }
        };

        variant.validate_value_input(input, context)
    }

    fn reject_tag(&self, error: ParseError) -> ParseResult<Option<Value>> {
        Validation::Failure(
            error
                .prefixed_with_key(self.discriminant.as_str())
                .with_kind(ErrorKind::InvalidDiscriminant),
        )
    }
}

impl Default for DiscriminatedUnion {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for DiscriminatedUnion {
    type Output = Value;

    fn validate_input(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Value> {
        self.dispatch(input, context)
            .map(|value| value.unwrap_or(Value::Null))
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        self.dispatch(input, context)
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        for validator in self.variants.values() {
            validator.collect_value_refs(refs);
        }
    }
}
