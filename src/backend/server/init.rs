/**
 * Server Initialization
 *
 * Builds the Axum application from a loaded `ServerConfig`:
 * 1. Connect the configured store (PostgreSQL or in-memory)
 * 2. Build the token service and password verifier from `AuthConfig`
 * 3. Assemble `AppState` and the router
 */

use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, ServerConfig};
use crate::backend::server::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to initialise storage: {0}")]
    Store(#[from] sqlx::Error),
    #[error("invalid password hashing configuration: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing quillpost backend server");

    let stores = load_store(config.database_url.as_deref()).await?;
    let app_state = AppState::new(&config.auth, stores)?;

    tracing::info!(
        "Auth configured (bcrypt cost {}, secure cookies: {})",
        config.auth.bcrypt_cost,
        config.auth.cookie_secure
    );

    Ok(create_router(app_state))
}
