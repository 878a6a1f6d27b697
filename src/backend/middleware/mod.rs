//! Middleware Module
//!
//! Request processing that runs before or alongside handlers.
//!
//! - **`auth`** - Session middleware and identity extractors
//! - **`ownership`** - Ownership guard for post mutations
//!
//! # Example
//!
//! ```rust,no_run
//! use quillpost::backend::middleware::session_middleware;
//! use quillpost::backend::server::AppState;
//! use axum::Router;
//!
//! fn with_sessions(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.layer(axum::middleware::from_fn_with_state(state, session_middleware))
//! }
//! ```

pub mod auth;

pub mod ownership;

pub use auth::{session_middleware, CurrentUser, MaybeUser};
pub use ownership::{authorize, ensure_owner, same_identity, Access};
