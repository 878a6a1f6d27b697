//! Public user data
//!
//! `Identity` is the only user shape that ever leaves the server. The stored
//! record with its password hash lives in `backend::auth::users` and has no
//! `Serialize` implementation.

use serde::{Deserialize, Serialize};

/// Shortest accepted username
pub const USERNAME_MIN_LEN: usize = 3;

/// Longest accepted username
pub const USERNAME_MAX_LEN: usize = 20;

/// Longest accepted password in bytes, bcrypt's input limit
pub const PASSWORD_MAX_BYTES: usize = 72;

/// Authenticated user's public data
///
/// Attached to a request after its session token has been verified and
/// returned by the register, login and check endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User ID (UUID string)
    pub id: String,
    /// Username
    pub username: String,
}

impl Identity {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

/// Validate username format
///
/// Usernames must be 3-20 characters long and contain only ASCII letters
/// and digits.
pub fn is_valid_username(username: &str) -> bool {
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&username.len())
        && username.chars().all(|c| c.is_ascii_alphanumeric())
}
