//! Validation context for depth limiting and reference resolution.
//!
//! This module provides the [`ValidationContext`] type that carries the
//! current nesting depth, the depth limit, and (when validating through a
//! [`SchemaRegistry`](crate::SchemaRegistry)) access to named validators.

use std::fmt;
use std::sync::Arc;

use crate::error::{ErrorKind, ParseError};
use crate::schema::ValueValidator;

/// Depth limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Validation context carries depth tracking and registry information.
///
/// Record, array and reference validators call [`descend`](Self::descend)
/// before validating their children. Once the depth reaches the limit,
/// descending fails with an [`ErrorKind::TooDeep`] error instead of
/// recursing further.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, ValidationContext, Validator};
/// use serde_json::json;
///
/// let schema = Schema::array(Schema::array(Schema::number()));
/// let context = ValidationContext::new().with_max_depth(1);
///
/// let result = schema.validate_with(&json!([[1]]), &context);
/// assert!(result.is_failure());
/// ```
#[derive(Clone)]
pub struct ValidationContext {
    registry: Option<Arc<dyn RegistryAccess>>,
    depth: usize,
    max_depth: usize,
}

impl ValidationContext {
    /// Creates a context with no registry and the default depth limit.
    pub fn new() -> Self {
        Self {
            registry: None,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Attaches a registry used to resolve references.
    pub fn with_registry(mut self, registry: Arc<dyn RegistryAccess>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Returns a context one level deeper, or a `TooDeep` error at the
    /// current location if the limit has been reached.
    pub fn descend(&self) -> Result<Self, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::new(
                ErrorKind::TooDeep,
                format!("too deeply nested (max depth {})", self.max_depth),
            ));
        }
        Ok(Self {
            registry: self.registry.clone(),
            depth: self.depth + 1,
            max_depth: self.max_depth,
        })
    }

    /// Returns the current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the maximum allowed depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the registry, if one is attached.
    pub fn registry(&self) -> Option<&dyn RegistryAccess> {
        self.registry.as_deref()
    }
}

impl fmt::Debug for ValidationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("has_registry", &self.registry.is_some())
            .field("depth", &self.depth)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up named validators.
///
/// Keeps the schema module independent of the registry implementation.
pub trait RegistryAccess: Send + Sync {
    /// Gets a validator by name.
    fn get_validator(&self, name: &str) -> Option<Arc<dyn ValueValidator>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descend_increments_depth() {
        let context = ValidationContext::new();
        let child = context.descend().unwrap();
        assert_eq!(context.depth(), 0);
        assert_eq!(child.depth(), 1);
        assert_eq!(child.max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_descend_fails_at_limit() {
        let context = ValidationContext::new().with_max_depth(1);
        let child = context.descend().unwrap();
        let error = child.descend().unwrap_err();
        assert_eq!(error.kind, ErrorKind::TooDeep);
        assert_eq!(error.message, "too deeply nested (max depth 1)");
        assert!(error.path.is_root());
    }

    #[test]
    fn test_default_has_no_registry() {
        assert!(ValidationContext::default().registry().is_none());
    }

    #[test]
    fn test_debug_output() {
        let context = ValidationContext::new().with_max_depth(4).descend().unwrap();
        assert_eq!(
            format!("{:?}", context),
            "ValidationContext { has_registry: false, depth: 1, max_depth: 4 }"
        );
    }
}
