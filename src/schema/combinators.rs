//! Validator combinators for composing validation logic.
//!
//! This module provides combinators that build a validator out of others:
//! - [`AndSchema`]: run two validators in sequence on the same value
//! - [`OrSchema`]: try one validator, fall back to another
//! - [`OptionalSchema`]: accept an absent value
//! - [`NullableSchema`]: accept `null`
//!
//! [`ValidatorExt`] offers the same combinators as methods.
//!
//! # Example
//!
//! ```rust
//! use shapeguard::{Schema, Validator, ValidatorExt};
//! use serde_json::json;
//!
//! // An id that is either a string or a number
//! let id = Schema::string().or(Schema::number());
//! assert!(id.validate(&json!("abc")).is_success());
//! assert!(id.validate(&json!(7)).is_success());
//!
//! // Two partial record shapes merged into one
//! let named = Schema::object().field("name", Schema::string());
//! let aged = Schema::object().field("age", Schema::number());
//! let person = named.and(aged);
//! assert!(person.validate(&json!({"name": "Ada", "age": 36})).is_success());
//! ```

use serde_json::Value;
use stillwater::{Either, Validation};

use crate::result::ParseResult;
use crate::validation::ValidationContext;

use super::traits::Validator;

/// Sequential conjunction of two validators.
///
/// The first validator runs on the input. If it fails its error is returned
/// unchanged and the second never runs. Otherwise the second validator runs
/// on the first one's validated value (not on the raw input) and its result
/// is returned as-is.
#[derive(Debug, Clone)]
pub struct AndSchema<A, B> {
    first: A,
    second: B,
}

impl<A: Validator, B: Validator> AndSchema<A, B> {
    /// Creates a validator running `first`, then `second` on its output.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Validator, B: Validator> Validator for AndSchema<A, B> {
    type Output = B::Output;

    fn validate_input(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<B::Output> {
        match self.first.validate_input_to_value(input, context) {
            Validation::Success(narrowed) => self.second.validate_input(narrowed.as_ref(), context),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        match self.first.validate_input_to_value(input, context) {
            Validation::Success(narrowed) => {
                self.second.validate_input_to_value(narrowed.as_ref(), context)
            }
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        self.first.collect_refs(refs);
        self.second.collect_refs(refs);
    }
}

/// Alternation of two validators.
///
/// The first success wins. When the first validator fails, the second runs on
/// the original input and its result is returned verbatim; the first error is
/// discarded, so a failure always reports the last attempted validator.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::or(Schema::string(), Schema::number());
///
/// let error = schema.validate(&json!(true)).into_result().unwrap_err();
/// assert_eq!(error.message, "expected number, got boolean");
/// ```
#[derive(Debug, Clone)]
pub struct OrSchema<A, B> {
    first: A,
    fallback: B,
}

impl<A: Validator, B: Validator> OrSchema<A, B> {
    /// Creates a validator trying `first`, then `fallback`.
    pub fn new(first: A, fallback: B) -> Self {
        Self { first, fallback }
    }
}

impl<A: Validator, B: Validator> Validator for OrSchema<A, B> {
    type Output = Either<A::Output, B::Output>;

    fn validate_input(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Either<A::Output, B::Output>> {
        match self.first.validate_input(input, context) {
            Validation::Success(value) => Validation::Success(Either::Left(value)),
            Validation::Failure(_) => self.fallback.validate_input(input, context).map(Either::Right),
        }
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        match self.first.validate_input_to_value(input, context) {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(_) => self.fallback.validate_input_to_value(input, context),
        }
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        self.first.collect_refs(refs);
        self.fallback.collect_refs(refs);
    }
}

/// Accepts an absent value; otherwise delegates.
///
/// An absent input succeeds with `None` without calling the inner validator.
/// `null` is not absent and is passed to the inner validator.
#[derive(Debug, Clone)]
pub struct OptionalSchema<S> {
    inner: S,
}

impl<S: Validator> OptionalSchema<S> {
    /// Wraps `inner` so that absent values are accepted.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Validator> Validator for OptionalSchema<S> {
    type Output = Option<S::Output>;

    fn validate_input(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<S::Output>> {
        match input {
            None => Validation::Success(None),
            Some(_) => self.inner.validate_input(input, context).map(Some),
        }
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        match input {
            None => Validation::Success(None),
            Some(_) => self.inner.validate_input_to_value(input, context),
        }
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        self.inner.collect_refs(refs);
    }
}

/// Accepts `null`; otherwise delegates.
///
/// A `null` input succeeds with `None` without calling the inner validator.
/// An absent input is passed to the inner validator.
#[derive(Debug, Clone)]
pub struct NullableSchema<S> {
    inner: S,
}

impl<S: Validator> NullableSchema<S> {
    /// Wraps `inner` so that `null` is accepted.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Validator> Validator for NullableSchema<S> {
    type Output = Option<S::Output>;

    fn validate_input(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<S::Output>> {
        match input {
            Some(Value::Null) => Validation::Success(None),
            _ => self.inner.validate_input(input, context).map(Some),
        }
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        match input {
            Some(Value::Null) => Validation::Success(Some(Value::Null)),
            _ => self.inner.validate_input_to_value(input, context),
        }
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        self.inner.collect_refs(refs);
    }
}

/// Method-style access to the combinators.
pub trait ValidatorExt: Validator + Sized {
    /// See [`AndSchema`].
    fn and<B: Validator>(self, next: B) -> AndSchema<Self, B> {
        AndSchema::new(self, next)
    }

    /// See [`OrSchema`].
    fn or<B: Validator>(self, fallback: B) -> OrSchema<Self, B> {
        OrSchema::new(self, fallback)
    }

    /// See [`OptionalSchema`].
    fn optional(self) -> OptionalSchema<Self> {
        OptionalSchema::new(self)
    }

    /// See [`NullableSchema`].
    fn nullable(self) -> NullableSchema<Self> {
        NullableSchema::new(self)
    }
}

impl<V: Validator> ValidatorExt for V {}
