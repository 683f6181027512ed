//! Error types for tweet construction and field access.
//!
//! Construction and field access fail with different types so callers can
//! tell a bad input apart from a missing field without inspecting messages.

use thiserror::Error;

/// Raised while building a [`Tweet`](crate::Tweet) from caller input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Missing input data")]
    Empty,

    #[error("Wrong type of input data: expected a JSON object or JSON text, got {actual}")]
    WrongType { actual: &'static str },

    #[error("Malformed JSON input: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Raised by accessors that read a required field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Field name must not be empty")]
    EmptyName,

    #[error("[{field}] doesn't exist")]
    Missing { field: String },

    #[error("Invalid value for [{field}]: {reason}")]
    InvalidValue { field: String, reason: String },

    /// Formatting failed even after unknown directives were escaped
    #[error("Invalid output time format '{format}'")]
    InvalidFormat { format: String },
}

/// Errors from loading a [`TweetaConfig`](crate::TweetaConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Crate-wide error for callers that want a single `?`-able type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Serialization(#[from] crate::serialization::SerializationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the crate-wide [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
