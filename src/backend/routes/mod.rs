//! Route Configuration Module
//!
//! - **`router`** - Main router creation, middleware stack and fallback
//! - **`api_routes`** - `/api` endpoints (auth, posts)
//!
//! # Example
//!
//! ```rust,no_run
//! use quillpost::backend::routes::create_router;
//! use quillpost::backend::server::{AppState, AuthConfig};
//!
//! # fn example() -> Result<(), bcrypt::BcryptError> {
//! let app_state = AppState::in_memory(&AuthConfig::new("dev-secret", 10))?;
//! let router = create_router(app_state);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
