/**
 * Authentication Handler Types
 *
 * Request bodies for register and login. Responses are plain `Identity`
 * values, so no response type here can carry a password hash.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::user::{
    is_valid_username, PASSWORD_MAX_BYTES, USERNAME_MAX_LEN, USERNAME_MIN_LEN,
};
use crate::shared::{SharedError, Validate};

/// Register request
#[derive(Deserialize, Serialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    /// Chosen username (3-20 chars, alphanumeric)
    pub username: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), SharedError> {
        if !is_valid_username(&self.username) {
            return Err(SharedError::validation(
                "username",
                format!(
                    "must be {USERNAME_MIN_LEN}-{USERNAME_MAX_LEN} characters of letters and digits"
                ),
            ));
        }
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "must not be empty"));
        }
        if self.password.len() > PASSWORD_MAX_BYTES {
            return Err(SharedError::validation(
                "password",
                format!("must be at most {PASSWORD_MAX_BYTES} bytes"),
            ));
        }
        Ok(())
    }
}

/// Login request
///
/// Decoding never fails. A body that is not a JSON object, or a field that is
/// missing or not a string, leaves that credential empty, and the handler
/// answers empty credentials with the same 401 as a wrong password.
#[derive(Debug, Default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or_default();
        let credential = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            username: credential("username"),
            password: credential("password"),
        }
    }
}
