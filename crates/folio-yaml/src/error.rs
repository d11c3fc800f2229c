//! Error types for manifest parsing.

use thiserror::Error;

/// Error type for manifest parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),
    /// Two case studies share an id
    #[error("Duplicate case study id: {0}")]
    DuplicateId(String),
    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}
