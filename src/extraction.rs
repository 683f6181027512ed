//! Path-based lookups into nested tweet JSON.
//!
//! `user.screen_name` or `entities.hashtags.[0].text` address values below
//! the top level of a record without chains of existence checks.

use serde_json::{Map, Value};
use std::fmt;

/// Represents a path to a field in a JSON record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    /// The raw path string
    pub raw: String,
    /// Parsed path segments
    pub segments: Vec<PathSegment>,
}

/// A segment in a field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object key (e.g., "user", "screen_name")
    Field(String),
    /// An array index (e.g., [0], [5])
    Index(usize),
}

impl PathSegment {
    fn step<'a>(&self, current: &'a Value) -> Option<&'a Value> {
        match self {
            PathSegment::Field(name) => current.as_object()?.get(name),
            PathSegment::Index(index) => current.as_array()?.get(*index),
        }
    }
}

impl FieldPath {
    /// Parse a field path with a given delimiter
    ///
    /// # Example
    ///
    /// ```
    /// use tweeta::extraction::{FieldPath, PathSegment};
    ///
    /// let path = FieldPath::parse("entities/urls/[0]", "/");
    /// assert_eq!(path.segments[2], PathSegment::Index(0));
    /// ```
    pub fn parse(path: &str, delimiter: &str) -> Self {
        let segments = path
            .split(delimiter)
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s.starts_with('[') && s.ends_with(']') {
                    if let Ok(index) = s[1..s.len() - 1].parse::<usize>() {
                        return PathSegment::Index(index);
                    }
                }
                PathSegment::Field(s.to_string())
            })
            .collect();

        Self {
            raw: path.to_string(),
            segments,
        }
    }

    /// Create a field path from a dotted string (common format)
    pub fn from_dotted(path: &str) -> Self {
        Self::parse(path, ".")
    }

    /// Walk `root` along this path.
    ///
    /// Returns `None` as soon as a segment does not match the shape of the
    /// value it is applied to. An empty path yields `root` itself.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |current, segment| segment.step(current))
    }

    /// Like [`FieldPath::resolve`], starting from a decoded JSON object.
    ///
    /// The first segment must name a key; an empty path yields `None`.
    pub fn resolve_in<'a>(&self, record: &'a Map<String, Value>) -> Option<&'a Value> {
        let (first, rest) = self.segments.split_first()?;
        let PathSegment::Field(name) = first else {
            return None;
        };
        rest.iter()
            .try_fold(record.get(name)?, |current, segment| segment.step(current))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Trait for records that can be addressed by [`FieldPath`]
pub trait Extractor {
    /// The value at `path`, if present (JSON `null` included)
    fn lookup(&self, path: &FieldPath) -> Option<&Value>;

    /// The value at `path` rendered as text
    ///
    /// Strings are returned unquoted, other scalars and containers as JSON.
    /// Absent and `null` values yield `None`.
    fn extract(&self, path: &FieldPath) -> Option<String> {
        match self.lookup(path)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Extract a value and parse it to a specific type
    fn extract_as<T>(&self, path: &FieldPath) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.extract(path).and_then(|s| s.parse().ok())
    }
}

impl Extractor for Value {
    fn lookup(&self, path: &FieldPath) -> Option<&Value> {
        path.resolve(self)
    }
}
