//! Tweet and user identifiers as they appear in the record.

use serde::{Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;

/// An identifier read from a record.
///
/// The API ships ids both as `id_str` and as a numeric `id`. The string form
/// is preferred; the numeric one is kept as a JSON number so 64-bit ids are
/// not rounded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Identifier {
    Text(String),
    Numeric(Number),
    #[default]
    Missing,
}

impl Identifier {
    /// String `id_str` first, then a numeric (or string) `id`.
    pub fn prefer_string(id_str: Option<&str>, id: Option<&Value>) -> Self {
        if let Some(s) = id_str {
            return Identifier::Text(s.to_string());
        }
        match id {
            Some(Value::Number(n)) => Identifier::Numeric(n.clone()),
            Some(Value::String(s)) => Identifier::Text(s.clone()),
            _ => Identifier::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Identifier::Missing)
    }

    /// The numeric form, when the id was numeric or a string of digits.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Identifier::Text(s) => s.parse().ok(),
            Identifier::Numeric(n) => n.as_u64(),
            Identifier::Missing => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Text(s) => write!(f, "{}", s),
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Missing => Ok(()),
        }
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Identifier::Text(s) => serializer.serialize_str(s),
            Identifier::Numeric(n) => n.serialize(serializer),
            Identifier::Missing => serializer.serialize_str(""),
        }
    }
}
