//! Server Module
//!
//! Startup plumbing for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and store selection
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`, fatal on a missing secret
//! 2. **Store Selection**: PostgreSQL with migrations, or in-memory
//! 3. **State Creation**: token service and password verifier from `AuthConfig`
//! 4. **Router Creation**: routes, session middleware, request tracing

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{AuthConfig, ServerConfig};
pub use init::create_app;
pub use state::AppState;
