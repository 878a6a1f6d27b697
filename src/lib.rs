//! Quillpost - Blog Backend Library
//!
//! A small blog server: users register and log in with a username and
//! password, receive a signed session cookie, and write posts that only they
//! may edit or delete.
//!
//! # Module Structure
//!
//! - **`shared`** - Plain data types (identity, posts, validation errors)
//! - **`backend`** - Axum server, authentication pipeline, stores, handlers
//!
//! # Authentication Pipeline
//!
//! 1. `backend::middleware::session_middleware` reads the `access_token`
//!    cookie and, when the token verifies, attaches an `Identity` to the
//!    request.
//! 2. Register and login handlers use `PasswordVerifier` and `TokenService`
//!    to check credentials and issue a fresh cookie.
//! 3. Post mutations resolve the identity, fetch the post, then call the
//!    ownership guard before touching the store.
//!
//! # Usage
//!
//! ```rust,no_run
//! use quillpost::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
