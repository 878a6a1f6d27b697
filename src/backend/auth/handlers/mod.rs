//! Authentication Handlers Module
//!
//! HTTP handlers for the `/api/auth` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request types
//! ├── register.rs  - Account creation
//! ├── login.rs     - Credential check and session issue
//! ├── check.rs     - Current identity
//! └── logout.rs    - Session cookie removal
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`check`** - GET /api/auth/check
//! - **`logout`** - POST /api/auth/logout
//!
//! # Example
//!
//! ```rust,no_run
//! use quillpost::backend::auth::handlers::{check, login, logout, register};
//! use quillpost::backend::server::AppState;
//! use axum::{routing::{get, post}, Router};
//!
//! fn auth_routes() -> Router<AppState> {
//!     Router::new()
//!         .route("/register", post(register))
//!         .route("/login", post(login))
//!         .route("/check", get(check))
//!         .route("/logout", post(logout))
//! }
//! ```

/// Request types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Check handler
pub mod check;

/// Logout handler
pub mod logout;

pub use types::{LoginRequest, RegisterRequest};

pub use check::check;
pub use login::login;
pub use logout::logout;
pub use register::register;
