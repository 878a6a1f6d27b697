/**
 * Check Handler
 *
 * GET /api/auth/check. Reports who the session cookie belongs to, with 401
 * when the request is anonymous.
 */
use axum::response::Json;

use crate::backend::middleware::CurrentUser;
use crate::shared::Identity;

/// Return the current identity
pub async fn check(CurrentUser(identity): CurrentUser) -> Json<Identity> {
    tracing::debug!("Session check for: {}", identity.username);
    Json(identity)
}
