//! # Shapeguard
//!
//! Composable validators for untrusted JSON.
//!
//! ## Overview
//!
//! A validator is built once out of small primitives and combinators, then
//! applied to any number of values received from outside the program. The
//! result is either the validated value or a single [`ParseError`] saying
//! where (a path such as `.items[2].id`) and why the value did not match.
//! Validation stops at the first mismatch.
//!
//! Results use stillwater's `Validation` type through the [`ParseResult`]
//! alias, so they can be matched on `Success`/`Failure` or turned into a
//! `Result` with `into_result()`.
//!
//! ## Core Types
//!
//! - [`Schema`]: Entry point for creating validators
//! - [`Validator`]: The trait every validator implements
//! - [`ParseError`]: The single error produced by a failed validation
//! - [`JsonPath`]: The location of an error inside the input
//! - [`SchemaRegistry`]: Named validators, references and recursive shapes
//!
//! ## Example
//!
//! ```rust
//! use shapeguard::{Schema, Validator, ValidatorExt};
//! use serde_json::json;
//!
//! let order = Schema::object()
//!     .field("id", Schema::string().or(Schema::number()))
//!     .field("status", Schema::one_of(["open", "shipped"]))
//!     .field(
//!         "items",
//!         Schema::array(
//!             Schema::object()
//!                 .field("sku", Schema::string())
//!                 .field("qty", Schema::number()),
//!         ),
//!     )
//!     .field("note", Schema::string().nullable().optional());
//!
//! let valid = json!({
//!     "id": 42,
//!     "status": "open",
//!     "items": [{"sku": "a-1", "qty": 2}],
//!     "note": null
//! });
//! assert!(order.validate(&valid).is_success());
//!
//! let invalid = json!({
//!     "id": 42,
//!     "status": "open",
//!     "items": [{"sku": "a-1", "qty": 2}, {"sku": 7, "qty": 1}]
//! });
//! let error = order.validate(&invalid).into_result().unwrap_err();
//! assert_eq!(error.to_string(), ".items[1].sku: expected string, got number");
//! ```

pub mod error;
pub mod kind;
pub mod path;
pub mod registry;
pub mod result;
pub mod schema;
pub mod validation;

pub use error::{ErrorKind, ParseError};
pub use kind::ValueKind;
pub use path::{JsonPath, PathSegment};
pub use registry::{RegistryError, SchemaRegistry};
pub use result::ParseResult;
pub use schema::{
    AndSchema, AnySchema, ArraySchema, BooleanSchema, DiscriminatedUnion, ExactSchema,
    KeyOfSchema, NullableSchema, NumberSchema, ObjectSchema, OneOfSchema, OptionalSchema,
    OrSchema, RefSchema, Schema, StringSchema, Validator, ValidatorExt, ValueValidator,
    DEFAULT_DISCRIMINANT,
};
pub use validation::{RegistryAccess, ValidationContext, DEFAULT_MAX_DEPTH};

/// Re-exported so callers can match on `OrSchema` output without a direct
/// stillwater dependency.
pub use stillwater::{Either, Validation};
