/**
 * Logout Handler
 *
 * POST /api/auth/logout. Clears the session cookie and answers 204, whether
 * or not the caller was logged in. Tokens are stateless, so a copy of the
 * token taken before logout keeps working until it expires.
 */
use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Response},
};

use crate::backend::auth::cookie::clear_session_cookie;
use crate::backend::server::state::AppState;

pub async fn logout(State(state): State<AppState>) -> Response {
    tracing::info!("Logout request");
    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, clear_session_cookie(state.cookie_secure))],
    )
        .into_response()
}
