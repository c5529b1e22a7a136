//! Value-membership validators.
//!
//! [`ExactSchema`] accepts one specific value, [`OneOfSchema`] a whitelist of
//! values, and [`KeyOfSchema`] a string naming one of a set of keys.
//! Equality is JSON equality without coercion: `"1"` never equals `1`, while
//! `1` and `1.0` are the same number.

use indexmap::IndexSet;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{ErrorKind, ParseError};
use crate::kind::{describe, ValueKind};
use crate::result::ParseResult;
use crate::validation::ValidationContext;

use super::traits::Validator;

/// Accepts exactly one value.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::exact("v1");
/// assert!(schema.validate(&json!("v1")).is_success());
///
/// let error = schema.validate(&json!("v2")).into_result().unwrap_err();
/// assert_eq!(error.message, r#"expected "v1", got "v2""#);
/// ```
#[derive(Debug, Clone)]
pub struct ExactSchema {
    expected: Value,
}

impl ExactSchema {
    /// Creates a validator accepting only `expected`.
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// Returns the accepted value.
    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

impl Validator for ExactSchema {
    type Output = Value;

    fn validate_input(
        &self,
        input: Option<&Value>,
        _context: &ValidationContext,
    ) -> ParseResult<Value> {
        match input {
            Some(value) if json_eq(value, &self.expected) => Validation::Success(value.clone()),
            other => Validation::Failure(ParseError::new(
                ErrorKind::InvalidValue,
                format!("expected {}, got {}", self.expected, describe(other)),
            )),
        }
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        self.validate_input(input, context).map(Some)
    }
}

/// Accepts any value from a fixed list.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, Validator};
/// use serde_json::json;
///
/// let status = Schema::one_of(["active", "suspended"]);
/// assert!(status.validate(&json!("active")).is_success());
///
/// let error = status.validate(&json!("deleted")).into_result().unwrap_err();
/// assert!(error.message.contains(r#""deleted""#));
/// ```
#[derive(Debug, Clone)]
pub struct OneOfSchema {
    allowed: Vec<Value>,
}

impl OneOfSchema {
    /// Creates a validator accepting any of `allowed`.
    pub fn new<I, T>(allowed: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the accepted values in declaration order.
    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}

impl Validator for OneOfSchema {
    type Output = Value;

    fn validate_input(
        &self,
        input: Option<&Value>,
        _context: &ValidationContext,
    ) -> ParseResult<Value> {
        let matched = input.and_then(|value| {
            self.allowed
                .iter()
                .find(|allowed| json_eq(value, allowed))
                .map(|_| value)
        });

        match matched {
            Some(value) => Validation::Success(value.clone()),
            None => {
                let expected: Vec<String> = self.allowed.iter().map(Value::to_string).collect();
                Validation::Failure(ParseError::new(
                    ErrorKind::InvalidValue,
                    format!(
                        "unexpected value {}, expected one of {}",
                        describe(input),
                        expected.join(", ")
                    ),
                ))
            }
        }
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        self.validate_input(input, context).map(Some)
    }
}

/// Accepts a string that is one of a set of keys.
///
/// This is the check a discriminated union runs on its discriminant field.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, Validator};
/// use serde_json::json;
///
/// let keys = Schema::key_of(["foo", "bar"]);
/// assert!(keys.validate(&json!("foo")).is_success());
///
/// let error = keys.validate(&json!("baz")).into_result().unwrap_err();
/// assert_eq!(error.message, r#"unknown key "baz", expected one of "foo", "bar""#);
///
/// let error = keys.validate(&json!(1)).into_result().unwrap_err();
/// assert_eq!(error.message, "expected string, got number");
/// ```
#[derive(Debug, Clone)]
pub struct KeyOfSchema {
    keys: IndexSet<String>,
}

impl KeyOfSchema {
    /// Creates a validator accepting any of `keys`.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `key` is one of the accepted keys.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

impl Validator for KeyOfSchema {
    type Output = String;

    fn validate_input(
        &self,
        input: Option<&Value>,
        _context: &ValidationContext,
    ) -> ParseResult<String> {
        let key = match input {
            Some(Value::String(key)) => key,
            other => {
                return Validation::Failure(ParseError::invalid_type(
                    "string",
                    ValueKind::of(other),
                ))
            }
        };

        if self.keys.contains(key.as_str()) {
            Validation::Success(key.clone())
        } else {
            Validation::Failure(unknown_key(key, self.keys.iter().map(String::as_str)))
        }
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        self.validate_input(input, context)
            .map(|key| Some(Value::String(key)))
    }
}

/// Builds the error for a string that is not one of `keys`.
pub(crate) fn unknown_key<'k>(key: &str, keys: impl Iterator<Item = &'k str>) -> ParseError {
    let expected: Vec<String> = keys.map(|k| Value::from(k).to_string()).collect();
    ParseError::new(
        ErrorKind::InvalidValue,
        format!(
            "unknown key {}, expected one of {}",
            Value::from(key),
            expected.join(", ")
        ),
    )
}

/// JSON equality where numbers compare by value regardless of representation.
fn json_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                a == b
            } else if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                a == b
            } else {
                a.as_f64() == b.as_f64()
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| json_eq(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| json_eq(x, y)))
        }
        _ => left == right,
    }
}
