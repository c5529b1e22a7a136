//! Registry for named validators and reference resolution.
//!
//! This module provides the [`SchemaRegistry`] type that stores named
//! validators and resolves [`Schema::ref_`](crate::Schema::ref_) references
//! during validation.

use parking_lot::RwLock;
use rayon::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::result::ParseResult;
use crate::schema::{Validator, ValueValidator};
use crate::validation::{RegistryAccess, ValidationContext, DEFAULT_MAX_DEPTH};

/// Type alias for the validator storage map.
type ValidatorMap = Arc<RwLock<HashMap<String, Arc<dyn ValueValidator>>>>;

/// A thread-safe registry of named validators.
///
/// Validators registered here can refer to each other (and to themselves)
/// through `Schema::ref_()`, which is how recursive shapes are expressed.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>`:
/// - any number of threads can validate concurrently (read access)
/// - registrations are serialized (write access)
///
/// Cloning a registry shares the same storage.
///
/// # Example
///
/// ```rust
/// use shapeguard::{Schema, SchemaRegistry};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry.register("UserId", Schema::number()).unwrap();
/// registry
///     .register(
///         "User",
///         Schema::object()
///             .field("id", Schema::ref_("UserId"))
///             .field("name", Schema::string()),
///     )
///     .unwrap();
///
/// let result = registry.validate("User", &json!({"id": 1, "name": "Ada"})).unwrap();
/// assert!(result.is_success());
/// ```
pub struct SchemaRegistry {
    validators: ValidatorMap,
    max_depth: usize,
}

impl SchemaRegistry {
    /// Creates a new empty registry with the default depth limit (128).
    pub fn new() -> Self {
        Self {
            validators: Arc::new(RwLock::new(HashMap::new())),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth for validations run by this registry.
    ///
    /// Each non-empty array, each record with declared fields and each
    /// reference resolution counts as one level. Exceeding the limit fails
    /// validation with a `TooDeep` error instead of recursing further.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapeguard::SchemaRegistry;
    ///
    /// let registry = SchemaRegistry::new().with_max_depth(32);
    /// ```
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Registers a validator under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapeguard::{Schema, SchemaRegistry};
    ///
    /// let registry = SchemaRegistry::new();
    /// registry.register("Email", Schema::string()).unwrap();
    ///
    /// assert!(registry.register("Email", Schema::string()).is_err());
    /// ```
    pub fn register<S>(&self, name: impl Into<String>, schema: S) -> Result<(), RegistryError>
    where
        S: ValueValidator + 'static,
    {
        let name = name.into();
        let mut validators = self.validators.write();

        if validators.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(schema = %name, "registered schema");

        validators.insert(name, Arc::new(schema));
        Ok(())
    }

    /// Retrieves a validator by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ValueValidator>> {
        self.validators.read().get(name).cloned()
    }

    /// Returns the reference names that no registered validator answers to.
    ///
    /// Call this after all validators are registered. The result is sorted
    /// and free of duplicates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapeguard::{Schema, SchemaRegistry};
    ///
    /// let registry = SchemaRegistry::new();
    /// registry
    ///     .register("User", Schema::object().field("id", Schema::ref_("UserId")))
    ///     .unwrap();
    ///
    /// assert_eq!(registry.validate_refs(), vec!["UserId"]);
    /// ```
    pub fn validate_refs(&self) -> Vec<String> {
        let validators = self.validators.read();
        let mut all_refs = Vec::new();

        for validator in validators.values() {
            validator.collect_value_refs(&mut all_refs);
        }

        let mut unresolved: Vec<String> = all_refs
            .into_iter()
            .filter(|name| !validators.contains_key(name))
            .collect();

        unresolved.sort();
        unresolved.dedup();
        unresolved
    }

    /// Validates a value against the validator registered under `schema_name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SchemaNotFound` if the name is not registered.
    /// Validation failures are reported inside the returned `ParseResult`.
    pub fn validate(
        &self,
        schema_name: &str,
        value: &Value,
    ) -> Result<ParseResult<Value>, RegistryError> {
        let validator = self.lookup(schema_name)?;
        Ok(validator.validate_with(value, &self.context()))
    }

    /// Validates many values against one registered validator in parallel.
    ///
    /// Results are returned in the order of `values`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SchemaNotFound` if the name is not registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapeguard::{Schema, SchemaRegistry};
    /// use serde_json::json;
    ///
    /// let registry = SchemaRegistry::new();
    /// registry.register("Port", Schema::number()).unwrap();
    ///
    /// let results = registry
    ///     .validate_many("Port", &[json!(80), json!("443"), json!(8080)])
    ///     .unwrap();
    /// let ok: Vec<bool> = results.iter().map(|r| r.is_success()).collect();
    /// assert_eq!(ok, vec![true, false, true]);
    /// ```
    pub fn validate_many(
        &self,
        schema_name: &str,
        values: &[Value],
    ) -> Result<Vec<ParseResult<Value>>, RegistryError> {
        let validator = self.lookup(schema_name)?;
        let context = self.context();

        Ok(values
            .par_iter()
            .map(|value| validator.validate_with(value, &context))
            .collect())
    }

    fn lookup(&self, schema_name: &str) -> Result<Arc<dyn ValueValidator>, RegistryError> {
        let found = self.get(schema_name);

        #[cfg(feature = "tracing")]
        if found.is_none() {
            tracing::debug!(schema = schema_name, "schema not registered");
        }

        found.ok_or_else(|| RegistryError::SchemaNotFound(schema_name.to_string()))
    }

    fn context(&self) -> ValidationContext {
        ValidationContext::new()
            .with_max_depth(self.max_depth)
            .with_registry(Arc::new(self.clone()))
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SchemaRegistry {
    fn clone(&self) -> Self {
        Self {
            validators: Arc::clone(&self.validators),
            max_depth: self.max_depth,
        }
    }
}

impl RegistryAccess for SchemaRegistry {
    fn get_validator(&self, name: &str) -> Option<Arc<dyn ValueValidator>> {
        self.get(name)
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a validator under a name that already exists.
    #[error("schema '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a name that is not registered.
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),
}
