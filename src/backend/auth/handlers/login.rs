/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue a session token
 * 4. Return the identity and set the session cookie
 *
 * # Security
 *
 * - Unknown user, wrong password and missing or malformed fields all return
 *   the same 401
 * - An unknown username still costs one bcrypt verification
 * - Password hashes are never returned in responses
 */
use axum::{
    body::Bytes,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::cookie::session_cookie;
use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::Identity;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If the credentials are missing, malformed or do not match a user
/// * `500 Internal Server Error` - If the store or token signing fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "password": "pw123" }
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Set-Cookie: access_token=eyJhbGciOi...; Path=/; HttpOnly; SameSite=Lax; Max-Age=604800
///
/// { "id": "123e4567-e89b-12d3-a456-426614174000", "username": "alice" }
/// ```
pub async fn login(State(state): State<AppState>, body: Bytes) -> Result<Response, BackendError> {
    let request = LoginRequest::from_body(&body);

    if request.username.is_empty() || request.password.is_empty() {
        tracing::warn!("Login request with missing credentials");
        return Err(BackendError::Unauthorized);
    }
    tracing::info!("Login request for: {}", request.username);

    let Some(user) = state.users.find_by_username(&request.username).await? else {
        state.passwords.verify_absent(&request.password).await;
        tracing::warn!("User not found: {}", request.username);
        return Err(BackendError::Unauthorized);
    };

    if !state
        .passwords
        .verify(&request.password, &user.password_hash)
        .await
    {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(BackendError::Unauthorized);
    }

    tracing::info!("User logged in successfully: {}", user.username);
    signed_in(&state, user.identity())
}

/// Issue a session for `identity` and build the 200 response carrying it
pub(super) fn signed_in(state: &AppState, identity: Identity) -> Result<Response, BackendError> {
    let token = state.tokens.issue(&identity).map_err(|e| {
        BackendError::internal(format!("failed to sign session token: {e}"))
    })?;
    let cookie = session_cookie(&token, state.cookie_secure)
        .map_err(|e| BackendError::internal(format!("invalid session cookie: {e}")))?;

    Ok(([(SET_COOKIE, cookie)], Json(identity)).into_response())
}
