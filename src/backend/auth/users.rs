/**
 * User Model
 *
 * The stored credential record. It has no `Serialize` implementation;
 * responses carry `User::identity`, which drops the password hash.
 */

use chrono::{DateTime, Utc};

use crate::shared::Identity;

/// User record as held by a `UserStore`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// Username (unique, 3-20 chars, alphanumeric)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public projection of this user
    pub fn identity(&self) -> Identity {
        Identity::new(self.id.to_string(), self.username.clone())
    }
}
