/**
 * Register Handler
 *
 * POST /api/auth/register. Creates an account and signs it in straight away,
 * so a successful response looks exactly like a successful login.
 *
 * # Process
 *
 * 1. Validate username (3-20 alphanumeric) and password (non-empty)
 * 2. Reject a taken username with 409
 * 3. Hash the password with bcrypt
 * 4. Insert the user; a concurrent duplicate also surfaces as 409
 * 5. Issue a session token in the `access_token` cookie
 */
use axum::{body::Bytes, extract::State, response::Response};

use crate::backend::auth::handlers::login::signed_in;
use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::error::BackendError;
use crate::backend::extract::parse_body;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body is malformed or fails validation
/// * `409 Conflict` - If the username is already taken
/// * `500 Internal Server Error` - If hashing, the store or token signing fails
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, BackendError> {
    let request: RegisterRequest = parse_body(&body)?;
    tracing::info!("Register request for username: {}", request.username);

    if state
        .users
        .find_by_username(&request.username)
        .await?
        .is_some()
    {
        tracing::warn!("Username already taken: {}", request.username);
        return Err(BackendError::conflict("Username already taken"));
    }

    let password_hash = state.passwords.hash(&request.password).await?;

    let user = state
        .users
        .create(&request.username, &password_hash)
        .await
        .map_err(|e| match e {
            StoreError::Conflict => {
                tracing::warn!("Username taken during registration: {}", request.username);
                BackendError::conflict("Username already taken")
            }
            other => other.into(),
        })?;

    tracing::info!("User registered successfully: {} ({})", user.username, user.id);
    signed_in(&state, user.identity())
}
