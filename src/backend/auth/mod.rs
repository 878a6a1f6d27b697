//! Authentication Module
//!
//! Registration, login and session management.
//!
//! # Architecture
//!
//! - **`users`** - Stored credential record
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issue and verification
//! - **`cookie`** - `access_token` cookie encoding and request token lookup
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: username and password → user created → session cookie set
//! 2. **Login**: username and password → credentials verified → session cookie set
//! 3. **Check**: session cookie → token verified → identity returned
//! 4. **Logout**: session cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs, valid for 3 days, carried in an HttpOnly cookie
//! - Every credential failure returns the same 401

/// Stored user record
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Session cookie
pub mod cookie;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{check, login, logout, register};
