//! Named references for registry-based validation.
//!
//! This module provides [`RefSchema`] which stands for a validator registered
//! under a name in a [`SchemaRegistry`](crate::SchemaRegistry). References
//! enable reuse and recursive shapes such as trees.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{ErrorKind, ParseError};
use crate::result::ParseResult;
use crate::validation::ValidationContext;

use super::traits::Validator;

/// A validator that resolves another validator by name at validation time.
///
/// References resolve through the registry carried by the
/// [`ValidationContext`], so they are normally validated via
/// `SchemaRegistry::validate()`. Each resolution counts as one level of
/// nesting against the depth limit.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, SchemaRegistry};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry
///     .register(
///         "Tree",
///         Schema::object()
///             .field("value", Schema::number())
///             .field("children", Schema::array(Schema::ref_("Tree"))),
///     )
///     .unwrap();
///
/// let result = registry
///     .validate("Tree", &json!({"value": 1, "children": [{"value": 2, "children": []}]}))
///     .unwrap();
/// assert!(result.is_success());
/// ```
#[derive(Debug, Clone)]
pub struct RefSchema {
    name: String,
}

impl RefSchema {
    /// Creates a new reference.
    ///
    /// This is typically called via `Schema::ref_()` rather than directly.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name of the referenced validator.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn resolve(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        let registry = match context.registry() {
            Some(registry) => registry,
            None => {
                return Validation::Failure(ParseError::new(
                    ErrorKind::MissingRegistry,
                    format!(
                        "reference to '{}' cannot be validated without a registry",
                        self.name
                    ),
                ))
            }
        };

        let validator = match registry.get_validator(&self.name) {
            Some(validator) => validator,
            None => {
                return Validation::Failure(ParseError::new(
                    ErrorKind::MissingReference,
                    format!("schema '{}' not found in registry", self.name),
                ))
            }
        };

        let child = match context.descend() {
            Ok(child) => child,
            Err(error) => return Validation::Failure(error),
        };

        validator.validate_value_input(input, &child)
    }
}

impl Validator for RefSchema {
    type Output = Value;

    fn validate_input(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Value> {
        self.resolve(input, context)
            .map(|value| value.unwrap_or(Value::Null))
    }

    fn validate_input_to_value(
        &self,
        input: Option<&Value>,
        context: &ValidationContext,
    ) -> ParseResult<Option<Value>> {
        self.resolve(input, context)
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        refs.push(self.name.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_without_registry_fails() {
        let error = RefSchema::new("User")
            .validate(&json!({}))
            .into_result()
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::MissingRegistry);
        assert!(error.message.contains("'User'"));
    }

    #[test]
    fn test_collect_refs_reports_name() {
        let mut refs = Vec::new();
        RefSchema::new("Node").collect_refs(&mut refs);
        assert_eq!(refs, vec!["Node".to_string()]);
    }
}
