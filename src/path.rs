//! Locations of values inside nested JSON structures.
//!
//! This module provides [`JsonPath`] and [`PathSegment`]. Paths in this crate
//! are built while an error unwinds out of nested validators: each enclosing
//! record or array prepends its own segment. Segments are therefore stored
//! innermost-first so that prepending is a push, and the path is rendered
//! outermost-first only when it is displayed.

use std::fmt::{self, Display};

/// A segment of a JSON path.
///
/// Paths are built from segments that represent either field access or array indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field/property access, rendered as `.name`
    Field(String),
    /// An array index access, rendered as `[42]`
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{}", name),
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// A path to a value in a nested JSON-like structure.
///
/// `JsonPath` renders locations like `.users[0].email`. The root path renders
/// as the empty string.
///
/// # Example
///
/// ```rust
/// use shapeguard::JsonPath;
///
/// let path = JsonPath::root()
///     .prefix_field("email")
///     .prefix_index(0)
///     .prefix_field("users");
///
/// assert_eq!(path.to_string(), ".users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    // innermost segment first
    reversed: Vec<PathSegment>,
}

impl JsonPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            reversed: vec![PathSegment::Field(name.into())],
        }
    }

    /// Creates a path from a single index segment.
    pub fn from_index(idx: usize) -> Self {
        Self {
            reversed: vec![PathSegment::Index(idx)],
        }
    }

    /// Builds a path from segments listed outermost-first.
    pub fn from_segments(segments: impl IntoIterator<Item = PathSegment>) -> Self {
        let mut reversed: Vec<_> = segments.into_iter().collect();
        reversed.reverse();
        Self { reversed }
    }

    /// Returns this path with a field segment in front of it.
    pub fn prefix_field(self, name: impl Into<String>) -> Self {
        self.prefix(PathSegment::Field(name.into()))
    }

    /// Returns this path with an index segment in front of it.
    pub fn prefix_index(self, index: usize) -> Self {
        self.prefix(PathSegment::Index(index))
    }

    /// Returns this path with `segment` in front of it.
    pub fn prefix(mut self, segment: PathSegment) -> Self {
        self.reversed.push(segment);
        self
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.reversed.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.reversed.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.reversed.is_empty()
    }

    /// Returns an iterator over the segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.reversed.iter().rev()
    }

    /// Returns the outermost segment, or None if this is root.
    pub fn first(&self) -> Option<&PathSegment> {
        self.reversed.last()
    }

    /// Returns the innermost segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.reversed.first()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
