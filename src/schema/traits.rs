//! Traits for validator polymorphism.
//!
//! This module provides the [`Validator`] trait implemented by every schema
//! type, and the type-erased [`ValueValidator`] used wherever validators with
//! different output types are stored together (record fields, union variants,
//! the registry).

use std::sync::Arc;

use serde_json::Value;
#[cfg(feature = "tracing")]
use stillwater::Validation;

use crate::result::ParseResult;
use crate::validation::ValidationContext;

/// A validator for untrusted JSON values.
///
/// Every validator has two views of its result:
/// - the **typed view** ([`validate_input`](Self::validate_input)) returns
///   `Self::Output`, e.g. `String` for a string validator;
/// - the **value view** ([`validate_input_to_value`](Self::validate_input_to_value))
///   returns the validated value as JSON, keeping every key the input already
///   had. Records and sequential composition build on this view.
///
/// The input is an `Option<&Value>` where `None` means the value is absent,
/// for instance a record field missing from the input object. In the value
/// view, `None` likewise means the result is absent.
///
/// The `Send + Sync` bounds allow validators to be built once and shared
/// across threads.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, Validator};
/// use serde_json::json;
///
/// let user = Schema::object()
///     .field("name", Schema::string())
///     .field("age", Schema::number());
///
/// let result = user.validate(&json!({"name": "Alice", "age": 30, "admin": true}));
/// let validated = result.into_result().unwrap();
///
/// // Keys the schema does not name pass through.
/// assert_eq!(validated["admin"], json!(true));
/// ```
pub trait Validator: Send + Sync {
    /// The typed output produced by successful validation.
    type Output;

    /// Validates a possibly-absent value, returning the typed output.
    fn validate_input(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Self::Output>;

    /// Validates a possibly-absent value, returning the validated JSON.
    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>>;

    /// Collects the names of registry references reachable from this validator.
    fn collect_refs(&self, _refs: &mut Vec<String>) {}

    /// Validates a value at the root with a default context.
    fn validate(&self, value: &Value) -> ParseResult<Self::Output> {
        self.validate_with(value, &ValidationContext::new())
    }

    /// Validates a value at the root with the given context.
    fn validate_with(
        &self,
        value: &Value,
        context: &ValidationContext,
    ) -> ParseResult<Self::Output> {
        let result = self.validate_input(Some(value), context);
        #[cfg(feature = "tracing")]
        if let Validation::Failure(error) = &result {
            tracing::debug!(
                path = %error.path,
                kind = %error.kind,
                "validation failed: {}",
                error.message
            );
        }
        result
    }

    /// Validates a value at the root and returns the validated JSON.
    fn validate_value(&self, value: &Value) -> ParseResult<Value> {
        self.validate_input_to_value(Some(value), &ValidationContext::new())
            .map(|validated| validated.unwrap_or(Value::Null))
    }
}

/// A type-erased validator that only exposes the value view.
///
/// Any type that implements [`Validator`] automatically implements
/// `ValueValidator`, so differently-typed validators can share one collection.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, ValueValidator};
///
/// let validators: Vec<Box<dyn ValueValidator>> = vec![
///     Box::new(Schema::string()),
///     Box::new(Schema::number()),
/// ];
/// assert_eq!(validators.len(), 2);
/// ```
pub trait ValueValidator: Send + Sync {
    /// Validates a possibly-absent value, returning the validated JSON.
    fn validate_value_input(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>>;

    /// Collects the names of registry references reachable from this validator.
    fn collect_value_refs(&self, refs: &mut Vec<String>);
}

impl<V: Validator> ValueValidator for V {
    fn validate_value_input(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        self.validate_input_to_value(input, context)
    }

    fn collect_value_refs(&self, refs: &mut Vec<String>) {
        self.collect_refs(refs)
    }
}

/// Shared erased validators (as returned by the registry) are validators
/// producing JSON.
impl Validator for Arc<dyn ValueValidator> {
    type Output = Value;

    fn validate_input(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Value> {
        (**self)
            .validate_value_input(input, context)
            .map(|validated| validated.unwrap_or(Value::Null))
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        (**self).validate_value_input(input, context)
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        (**self).collect_value_refs(refs)
    }
}
