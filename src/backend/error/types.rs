/**
 * Backend Error Types
 *
 * Every failure a handler can produce, each mapped to exactly one HTTP
 * status code.
 *
 * # Error Categories
 *
 * - `SharedError` - malformed or invalid request body (400)
 * - `Unauthorized` - no identity, unknown user or wrong password (401)
 * - `Forbidden` - authenticated but not the owner (403)
 * - `NotFound` - well-formed id with no record (404)
 * - `Conflict` - duplicate username (409)
 * - `Internal` / `Store` - hashing, signing or storage faults (500)
 *
 * Internal details are kept for logs only; `message()` never exposes them.
 */

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request body failed to decode or validate
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// A request parameter (path or query) is malformed
    #[error("Bad request: {message}")]
    BadRequest {
        /// Human-readable error message
        message: String,
    },

    /// Missing identity or rejected credentials
    ///
    /// Login failures always use this variant so the response never says
    /// whether the username exists.
    #[error("Unauthorized")]
    Unauthorized,

    /// Authenticated user does not own the resource
    #[error("Forbidden")]
    Forbidden,

    /// Resource does not exist
    #[error("Not found")]
    NotFound,

    /// Resource already exists
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected server fault (hashing, signing, task join)
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for logs; not sent to clients
        message: String,
    },

    /// Storage layer failure
    #[error(transparent)]
    Store(StoreError),
}

impl BackendError {
    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SharedError(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Store(StoreError::Conflict) => StatusCode::CONFLICT,
            Self::Internal { .. } | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::SharedError(err) => err.to_string(),
            Self::BadRequest { message } | Self::Conflict { message } => message.clone(),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::Forbidden => "Forbidden".to_string(),
            Self::NotFound => "Not found".to_string(),
            Self::Store(StoreError::Conflict) => "Already exists".to_string(),
            Self::Internal { .. } | Self::Store(_) => "Internal Server Error".to_string(),
        }
    }

    /// True for faults that must be logged as server errors
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => Self::conflict("Already exists"),
            other => Self::Store(other),
        }
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}
