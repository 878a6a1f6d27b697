/**
 * Application State Management
 *
 * `AppState` is built once at startup and cloned into every handler. Every
 * field is either an `Arc` to an immutable service or an `Arc<dyn …>` store
 * whose implementation handles its own synchronisation, so requests share no
 * mutable in-memory state.
 *
 * The `FromRef` implementations let handlers extract only the piece they
 * need with `State<T>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::{password::PasswordVerifier, sessions::TokenService};
use crate::backend::server::config::{AuthConfig, Stores};
use crate::backend::store::{PostStore, UserStore};

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub users: Arc<dyn UserStore>,
    /// Post store
    pub posts: Arc<dyn PostStore>,
    /// Session token issuer/verifier
    pub tokens: Arc<TokenService>,
    /// Password hasher/verifier
    pub passwords: Arc<PasswordVerifier>,
    /// Whether session cookies carry the `Secure` attribute
    pub cookie_secure: bool,
}

impl AppState {
    /// Assemble state from configuration and already-connected stores
    pub fn new(auth: &AuthConfig, stores: Stores) -> Result<Self, bcrypt::BcryptError> {
        Ok(Self {
            users: stores.users,
            posts: stores.posts,
            tokens: Arc::new(TokenService::new(auth)),
            passwords: Arc::new(PasswordVerifier::new(auth)?),
            cookie_secure: auth.cookie_secure,
        })
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory(auth: &AuthConfig) -> Result<Self, bcrypt::BcryptError> {
        Self::new(auth, Stores::in_memory())
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<dyn PostStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}
