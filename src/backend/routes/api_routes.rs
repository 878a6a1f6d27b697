/**
 * API Route Handlers
 *
 * Every route under `/api`.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - Create an account and sign in
 * - `POST /api/auth/login` - Sign in
 * - `GET /api/auth/check` - Current identity (requires a session)
 * - `POST /api/auth/logout` - Clear the session cookie
 *
 * ## Posts
 * - `GET /api/posts` - Paginated list, filterable by `username` and `tag`
 * - `POST /api/posts` - Write a post (requires a session)
 * - `GET /api/posts/{id}` - Read one post
 * - `PATCH /api/posts/{id}` - Update a post (owner only)
 * - `DELETE /api/posts/{id}` - Remove a post (owner only)
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{check, login, logout, register};
use crate::backend::posts::{list_posts, read_post, remove_post, update_post, write_post};
use crate::backend::server::state::AppState;

/// Build the `/api` sub-router
///
/// Authentication requirements are enforced by the handlers' extractors,
/// not by the routes, so every route here sees the same middleware stack.
pub fn configure_api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/posts", post_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/check", get(check))
        .route("/logout", post(logout))
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(write_post))
        .route(
            "/{id}",
            get(read_post).patch(update_post).delete(remove_post),
        )
}
