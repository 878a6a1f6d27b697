//! Backend Module
//!
//! The HTTP server: configuration and state, routing, authentication, the
//! ownership guard, post handlers and storage.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, startup
//! - **`routes`** - Router assembly
//! - **`auth`** - Passwords, session tokens, cookie, auth handlers
//! - **`middleware`** - Session middleware, identity extractors, ownership guard
//! - **`posts`** - Post handlers and request types
//! - **`store`** - `UserStore` / `PostStore` and their backends
//! - **`error`** - `BackendError` and its HTTP mapping
//! - **`extract`** - JSON body decoding

/// Server configuration and initialization
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and session management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Post handlers
pub mod posts;

/// Storage backends
pub mod store;

/// Error types and HTTP conversion
pub mod error;

/// Request body decoding
pub mod extract;

pub use error::BackendError;
pub use server::create_app;
