//! Validator definitions.
//!
//! This module provides the validator types and the [`Schema`] entry point
//! that builds them. Validators are composed once, usually at startup, and
//! then applied to any number of untrusted values. Validation stops at the
//! first mismatch and reports exactly one error.
//!
//! # Example
//!
//! ```rust
//! use shapeguard::{Schema, Validator};
//! use serde_json::json;
//!
//! let schema = Schema::array(Schema::object().field("id", Schema::number()));
//!
//! let error = schema
//!     .validate(&json!([{"id": 1}, {"id": "2"}, {"id": "3"}]))
//!     .into_result()
//!     .unwrap_err();
//! assert_eq!(error.to_string(), "[1].id: expected number, got string");
//! ```

mod array;
mod combinators;
mod literal;
mod object;
mod primitive;
mod ref_schema;
mod traits;
mod union;

use serde_json::Value;

pub use array::ArraySchema;
pub use combinators::{AndSchema, NullableSchema, OptionalSchema, OrSchema, ValidatorExt};
pub use literal::{ExactSchema, KeyOfSchema, OneOfSchema};
pub use object::ObjectSchema;
pub use primitive::{AnySchema, BooleanSchema, NumberSchema, StringSchema};
pub use ref_schema::RefSchema;
pub use traits::{Validator, ValueValidator};
pub use union::{DiscriminatedUnion, DEFAULT_DISCRIMINANT};

/// Entry point for creating validators.
///
/// `Schema` provides one factory function per validator. Combinators take
/// other validators by value and own them.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, Validator};
/// use serde_json::json;
///
/// let event = Schema::object()
///     .field("id", Schema::or(Schema::string(), Schema::number()))
///     .field("tags", Schema::array(Schema::string()))
///     .field("note", Schema::optional(Schema::nullable(Schema::string())))
///     .field("level", Schema::one_of(["info", "warn", "error"]));
///
/// let result = event.validate(&json!({
///     "id": 17,
///     "tags": ["a", "b"],
///     "level": "warn",
///     "source": "collector"
/// }));
/// assert!(result.is_success());
/// ```
pub struct Schema;

impl Schema {
    /// Creates a validator that accepts strings.
    pub fn string() -> StringSchema {
        StringSchema::new()
    }

    /// Creates a validator that accepts numbers.
    pub fn number() -> NumberSchema {
        NumberSchema::new()
    }

    /// Creates a validator that accepts booleans.
    pub fn boolean() -> BooleanSchema {
        BooleanSchema::new()
    }

    /// Creates an object validator.
    ///
    /// Without fields it accepts any JSON object or array. Add fields with
    /// [`ObjectSchema::field`] to validate a record; properties that are not
    /// declared pass through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapeguard::{Schema, Validator};
    /// use serde_json::json;
    ///
    /// let schema = Schema::object().field("a", Schema::string());
    ///
    /// let record = schema.validate(&json!({"a": "x", "b": 1})).into_result().unwrap();
    /// assert_eq!(record["b"], json!(1));
    /// ```
    pub fn object() -> ObjectSchema {
        ObjectSchema::new()
    }

    /// Creates a validator that accepts every value unchanged.
    pub fn any() -> AnySchema {
        AnySchema::new()
    }

    /// Creates a validator accepting only `expected`.
    pub fn exact(expected: impl Into<Value>) -> ExactSchema {
        ExactSchema::new(expected)
    }

    /// Creates a validator accepting any of `allowed`.
    pub fn one_of<I, T>(allowed: I) -> OneOfSchema
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        OneOfSchema::new(allowed)
    }

    /// Creates a validator accepting a string that is one of `keys`.
    pub fn key_of<I, K>(keys: I) -> KeyOfSchema
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        KeyOfSchema::new(keys)
    }

    /// Creates a validator for arrays whose elements all pass `item_schema`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapeguard::{Schema, Validator};
    /// use serde_json::json;
    ///
    /// let schema = Schema::array(Schema::boolean());
    /// assert!(schema.validate(&json!([true, false])).is_success());
    /// assert!(schema.validate(&json!([])).is_success());
    /// assert!(schema.validate(&json!("true")).is_failure());
    /// ```
    pub fn array<S: Validator>(item_schema: S) -> ArraySchema<S> {
        ArraySchema::new(item_schema)
    }

    /// Creates a validator running `first`, then `second` on its output.
    pub fn and<A: Validator, B: Validator>(first: A, second: B) -> AndSchema<A, B> {
        AndSchema::new(first, second)
    }

    /// Creates a validator trying `first`, then `fallback` on the same input.
    pub fn or<A: Validator, B: Validator>(first: A, fallback: B) -> OrSchema<A, B> {
        OrSchema::new(first, fallback)
    }

    /// Creates a validator that also accepts an absent value.
    pub fn optional<S: Validator>(inner: S) -> OptionalSchema<S> {
        OptionalSchema::new(inner)
    }

    /// Creates a validator that also accepts `null`.
    pub fn nullable<S: Validator>(inner: S) -> NullableSchema<S> {
        NullableSchema::new(inner)
    }

    /// Creates a union dispatching on the `type` field.
    pub fn discriminated_union() -> DiscriminatedUnion {
        DiscriminatedUnion::new()
    }

    /// Creates a reference to a validator registered under `name`.
    pub fn ref_(name: impl Into<String>) -> RefSchema {
        RefSchema::new(name)
    }
}
