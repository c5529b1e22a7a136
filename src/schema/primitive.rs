//! Category validators.
//!
//! This module provides the validators that check only the runtime category
//! of a value: [`StringSchema`], [`NumberSchema`], [`BooleanSchema`] and the
//! always-accepting [`AnySchema`]. The object category check lives in
//! [`ObjectSchema`](super::ObjectSchema), which doubles as the record validator.
//!
//! Failures are reported at the root path as `expected <category>, got <category>`;
//! enclosing validators add the location while the error unwinds.

use serde_json::{Number, Value};
use stillwater::Validation;

use crate::error::ParseError;
use crate::kind::ValueKind;
use crate::result::ParseResult;
use crate::validation::ValidationContext;

use super::traits::Validator;

/// Accepts strings.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, Validator};
/// use serde_json::json;
///
/// assert!(Schema::string().validate(&json!("hello")).is_success());
///
/// let error = Schema::string().validate(&json!(42)).into_result().unwrap_err();
/// assert_eq!(error.message, "expected string, got number");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSchema;

impl StringSchema {
    /// Creates a new string validator.
    pub fn new() -> Self {
        Self
    }
}

impl Validator for StringSchema {
    type Output = String;

    fn validate_input(
        &self,
        input: Option<&Value>,
        _context: &ValidationContext,
    ) -> ParseResult<String> {
        match input {
            Some(Value::String(s)) => Validation::Success(s.clone()),
            other => Validation::Failure(ParseError::invalid_type(
                "string",
                ValueKind::of(other),
            )),
        }
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        self.validate_input(input, context)
            .map(|s| Some(Value::String(s)))
    }
}

/// Accepts numbers, integer or floating point.
///
/// The output keeps the [`serde_json::Number`] as parsed, so large integers
/// are not rounded through `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberSchema;

impl NumberSchema {
    /// Creates a new number validator.
    pub fn new() -> Self {
        Self
    }
}

impl Validator for NumberSchema {
    type Output = Number;

    fn validate_input(
        &self,
        input: Option<&Value>,
        _context: &ValidationContext,
    ) -> ParseResult<Number> {
        match input {
            Some(Value::Number(n)) => Validation::Success(n.clone()),
            other => Validation::Failure(ParseError::invalid_type(
                "number",
                ValueKind::of(other),
            )),
        }
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        self.validate_input(input, context)
            .map(|n| Some(Value::Number(n)))
    }
}

/// Accepts `true` and `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSchema;

impl BooleanSchema {
    /// Creates a new boolean validator.
    pub fn new() -> Self {
        Self
    }
}

impl Validator for BooleanSchema {
    type Output = bool;

    fn validate_input(
        &self,
        input: Option<&Value>,
        _context: &ValidationContext,
    ) -> ParseResult<bool> {
        match input {
            Some(Value::Bool(b)) => Validation::Success(*b),
            other => Validation::Failure(ParseError::invalid_type(
                "boolean",
                ValueKind::of(other),
            )),
        }
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        self.validate_input(input, context)
            .map(|b| Some(Value::Bool(b)))
    }
}

/// Accepts anything, returning the input unchanged.
///
/// This is the escape hatch for fields whose shape the caller does not care
/// about. In the value view an absent input stays absent; the typed view has
/// no way to express absence and yields `null` for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnySchema;

impl AnySchema {
    /// Creates a new validator that accepts every value.
    pub fn new() -> Self {
        Self
    }
}

impl Validator for AnySchema {
    type Output = Value;

    fn validate_input(
        &self,
        input: Option<&Value>,
        _context: &ValidationContext,
    ) -> ParseResult<Value> {
        Validation::Success(input.cloned().unwrap_or(Value::Null))
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        _context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        Validation::Success(input.cloned())
    }
}
