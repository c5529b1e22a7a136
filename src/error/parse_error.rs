//! The validation error type.
//!
//! This module provides [`ParseError`], the single error a failed validation
//! returns, and [`ErrorKind`], its machine-readable category.

use std::fmt::{self, Display};

use crate::kind::ValueKind;
use crate::path::JsonPath;

/// Machine-readable category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value has the wrong runtime category.
    InvalidType,
    /// The value has the right category but is not in the permitted set.
    InvalidValue,
    /// A discriminated union could not pick a variant.
    InvalidDiscriminant,
    /// The input nests deeper than the configured limit.
    TooDeep,
    /// A reference names a validator the registry does not hold.
    MissingReference,
    /// A reference was validated without a registry.
    MissingRegistry,
}

impl ErrorKind {
    /// Returns the snake_case code for this kind.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidType => "invalid_type",
            ErrorKind::InvalidValue => "invalid_value",
            ErrorKind::InvalidDiscriminant => "invalid_discriminant",
            ErrorKind::TooDeep => "too_deep",
            ErrorKind::MissingReference => "missing_reference",
            ErrorKind::MissingRegistry => "missing_registry",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A validation failure with its location.
///
/// Validators create errors at the root path; enclosing record and array
/// validators prepend their segment as the error travels outward, so the
/// final path reads from the outermost to the innermost failing location.
///
/// # Example
///
/// ```rust
/// use shapeguard::{ErrorKind, ParseError};
///
/// let error = ParseError::new(ErrorKind::InvalidValue, "unknown key \"baz\"")
///     .prefixed_with_key("type")
///     .prefixed_with_index(2);
///
/// assert_eq!(error.path.to_string(), "[2].type");
/// assert_eq!(error.to_string(), "[2].type: unknown key \"baz\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Where the failing value sits, relative to the validated root.
    pub path: JsonPath,
    /// Human-readable description of the failure.
    pub message: String,
    /// Category of the failure.
    pub kind: ErrorKind,
}

impl ParseError {
    /// Creates an error at the root path.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            path: JsonPath::root(),
            message: message.into(),
            kind,
        }
    }

    /// Creates an `expected <expected>, got <kind>` category mismatch.
    pub fn invalid_type(expected: &str, got: ValueKind) -> Self {
        Self::new(
            ErrorKind::InvalidType,
            format!("expected {}, got {}", expected, got),
        )
    }

    /// Returns this error with `.key` in front of its path.
    pub fn prefixed_with_key(self, key: impl Into<String>) -> Self {
        Self {
            path: self.path.prefix_field(key),
            ..self
        }
    }

    /// Returns this error with `[index]` in front of its path.
    pub fn prefixed_with_index(self, index: usize) -> Self {
        Self {
            path: self.path.prefix_index(index),
            ..self
        }
    }

    /// Returns this error with a different kind, keeping path and message.
    pub fn with_kind(self, kind: ErrorKind) -> Self {
        Self { kind, ..self }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ParseError {}

// Errors cross thread boundaries when validators are shared.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ParseError>();
    assert_sync::<ParseError>();
};
