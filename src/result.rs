//! The outcome type of every validator.
//!
//! A validation either succeeds with the validated value or fails with one
//! [`ParseError`]. The outcome is stillwater's [`Validation`], which already
//! provides construction (`Validation::Success`, `Validation::Failure`),
//! discrimination (`is_success`, `is_failure`) and error mapping (`map_err`).
//! This module adds the path-prefixing functions passed to `map_err` while an
//! error unwinds out of nested validators.
//!
//! # Example
//!
//! ```rust
//! use shapeguard::result::{with_index_prefix, with_key_prefix, ParseResult};
//! use shapeguard::{ErrorKind, ParseError};
//! use stillwater::Validation;
//!
//! let inner: ParseResult<()> =
//!     Validation::Failure(ParseError::new(ErrorKind::InvalidValue, "bad"));
//!
//! let outer = inner.map_err(with_key_prefix("id")).map_err(with_index_prefix(4));
//! let error = outer.into_result().unwrap_err();
//! assert_eq!(error.path.to_string(), "[4].id");
//! ```

use stillwater::Validation;

use crate::error::ParseError;

/// Result of applying a validator: the validated value or the first error.
pub type ParseResult<T> = Validation<T, ParseError>;

/// Returns a function that prepends `.key` to an error's path.
pub fn with_key_prefix(key: impl Into<String>) -> impl FnOnce(ParseError) -> ParseError {
    let key = key.into();
    move |error| error.prefixed_with_key(key)
}

/// Returns a function that prepends `[index]` to an error's path.
pub fn with_index_prefix(index: usize) -> impl FnOnce(ParseError) -> ParseError {
    move |error| error.prefixed_with_index(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_prefix_passes_success_through() {
        let result: ParseResult<i32> = Validation::Success(7);
        let mapped = result.map_err(with_key_prefix("a"));
        assert_eq!(mapped, Validation::Success(7));
    }

    #[test]
    fn test_prefixes_compose_while_unwinding() {
        let result: ParseResult<i32> =
            Validation::Failure(ParseError::new(ErrorKind::InvalidType, "expected number, got string"));

        let error = result
            .map_err(with_key_prefix("b"))
            .map_err(with_index_prefix(0))
            .map_err(with_key_prefix("items"))
            .into_result()
            .unwrap_err();

        assert_eq!(error.path.to_string(), ".items[0].b");
        assert_eq!(error.message, "expected number, got string");
    }
}
