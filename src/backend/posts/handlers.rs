//! Post HTTP Handlers
//!
//! Reads are public. Writing needs a logged-in user, and update/delete need
//! the post's owner. Mutating handlers check in a fixed order: identity
//! (401), id format (400), existence (404), ownership (403), then the body
//! (400).
//!
//! Query and path extractors are taken as `Result` so their rejections
//! leave through `BackendError` with the same JSON body as every other 400.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::extract::parse_body;
use crate::backend::middleware::{ensure_owner, CurrentUser};
use crate::backend::posts::types::{ListQuery, UpdatePostRequest, WritePostRequest};
use crate::backend::store::PostStore;
use crate::shared::post::{last_page, PAGE_SIZE};
use crate::shared::{NewPost, Owner, Post};

/// Response header carrying the number of the last list page
pub const LAST_PAGE_HEADER: &str = "last-page";

/// GET /api/posts
pub async fn list_posts(
    State(posts): State<Arc<dyn PostStore>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Response, BackendError> {
    let Query(query) = query?;
    let page = query.page()?;
    let offset = (page - 1)
        .checked_mul(PAGE_SIZE)
        .ok_or_else(|| BackendError::bad_request(format!("invalid page: {page}")))?;
    let filter = query.filter();

    let items: Vec<Post> = posts
        .list(&filter, offset, PAGE_SIZE)
        .await?
        .into_iter()
        .map(Post::preview)
        .collect();
    let count = posts.count(&filter).await?;

    Ok((
        [(LAST_PAGE_HEADER, HeaderValue::from(last_page(count)))],
        Json(items),
    )
        .into_response())
}

/// POST /api/posts
pub async fn write_post(
    State(posts): State<Arc<dyn PostStore>>,
    CurrentUser(identity): CurrentUser,
    body: Bytes,
) -> Result<Json<Post>, BackendError> {
    let request: WritePostRequest = parse_body(&body)?;

    let post = posts
        .create(NewPost {
            title: request.title,
            body: request.body,
            tags: request.tags,
            user: Owner::from(&identity),
        })
        .await?;

    tracing::info!("Post {} written by {}", post.id, identity.username);
    Ok(Json(post))
}

/// GET /api/posts/{id}
pub async fn read_post(
    State(posts): State<Arc<dyn PostStore>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Post>, BackendError> {
    let Path(id) = path?;
    let id = parse_post_id(&id)?;
    let post = posts.find_by_id(id).await?.ok_or(BackendError::NotFound)?;
    Ok(Json(post))
}

/// PATCH /api/posts/{id}
pub async fn update_post(
    State(posts): State<Arc<dyn PostStore>>,
    CurrentUser(identity): CurrentUser,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Post>, BackendError> {
    let Path(id) = path?;
    let id = parse_post_id(&id)?;
    let post = posts.find_by_id(id).await?.ok_or(BackendError::NotFound)?;
    ensure_owner(Some(&identity), Some(&post.user))?;

    let request: UpdatePostRequest = parse_body(&body)?;
    let updated = posts
        .update(id, request.into())
        .await?
        .ok_or(BackendError::NotFound)?;

    tracing::info!("Post {} updated by {}", id, identity.username);
    Ok(Json(updated))
}

/// DELETE /api/posts/{id}
pub async fn remove_post(
    State(posts): State<Arc<dyn PostStore>>,
    CurrentUser(identity): CurrentUser,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, BackendError> {
    let Path(id) = path?;
    let id = parse_post_id(&id)?;
    let post = posts.find_by_id(id).await?.ok_or(BackendError::NotFound)?;
    ensure_owner(Some(&identity), Some(&post.user))?;

    if !posts.delete(id).await? {
        return Err(BackendError::NotFound);
    }

    tracing::info!("Post {} removed by {}", id, identity.username);
    Ok(StatusCode::NO_CONTENT)
}

fn parse_post_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::bad_request(format!("invalid post id: {raw}")))
}
