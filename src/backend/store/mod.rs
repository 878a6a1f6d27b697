//! Storage Module
//!
//! Users and posts are reached through two object-safe traits so handlers
//! never know which backend they talk to.
//!
//! - **`postgres`** - `PgStore`, sqlx on PostgreSQL (production)
//! - **`memory`** - `MemoryStore`, `RwLock`-guarded maps (tests, local runs)
//!
//! Both enforce username uniqueness inside `UserStore::create` and report a
//! duplicate as `StoreError::Conflict`.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::shared::{NewPost, Post, PostFilter, PostPatch};

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique constraint violated
    #[error("record already exists")]
    Conflict,

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Credential store
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user; fails with `StoreError::Conflict` if the username is taken
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, StoreError>;
}

/// Post document store
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<Post, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Newest first, `limit` posts starting at `offset`
    async fn list(
        &self,
        filter: &PostFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, StoreError>;

    async fn count(&self, filter: &PostFilter) -> Result<i64, StoreError>;

    /// Apply a partial update; `Ok(None)` if the post does not exist
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, StoreError>;

    /// Remove a post; `Ok(false)` if it did not exist
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
