/**
 * Session Middleware
 *
 * Runs before every route handler. It looks for a session token, verifies
 * it, and on success inserts the resulting `Identity` into the request's
 * extensions. It never rejects a request: a missing, expired or forged
 * token just leaves the request anonymous, and each handler decides whether
 * anonymous access is allowed.
 *
 * The identity travels in the request's own extensions map, so concurrent
 * requests can never observe each other's identity.
 */

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::{cookie::extract_session_token, sessions::TokenService};
use crate::backend::error::BackendError;
use crate::shared::Identity;

/// Resolve the request's identity from its session token
pub async fn session_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = extract_session_token(request.headers()) {
        match tokens.verify(&token) {
            Some(identity) => {
                request.extensions_mut().insert(identity);
            }
            None => tracing::debug!("Ignoring invalid session token"),
        }
    }

    next.run(request).await
}

/// Extractor for routes that require a logged-in user
///
/// Rejects with 401 when the session middleware attached no identity.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Identity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentUser)
            .ok_or(BackendError::Unauthorized)
    }
}

/// Extractor for routes that work with or without a logged-in user
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<Identity>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<Identity>().cloned()))
    }
}
