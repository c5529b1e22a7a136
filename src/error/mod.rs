//! Error types for validation failures.
//!
//! A failed validation yields exactly one [`ParseError`] describing the first
//! mismatch encountered, with the path to the offending value.

mod parse_error;

pub use parse_error::{ErrorKind, ParseError};
