//! Shared Error Types
//!
//! Errors raised while checking the shape of request payloads. They are
//! independent of the HTTP layer so the validators in `shared::user` and
//! `shared::post` can be unit tested on their own.
//!
//! # Usage
//!
//! ```rust
//! use quillpost::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "must be 3-20 characters");
//! ```
use thiserror::Error;

/// Request shape errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON body could not be decoded into the expected structure
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// A decoded field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field, when known
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::SerializationError { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Implemented by request bodies that carry rules beyond their serde shape
pub trait Validate {
    fn validate(&self) -> Result<(), SharedError>;
}
