/**
 * PostgreSQL Store
 *
 * sqlx-backed `UserStore` and `PostStore`. The schema lives in
 * `migrations/` and is applied by `server::config::load_store`.
 *
 * Username uniqueness is a `UNIQUE` index, so two concurrent registrations
 * of the same name cannot both succeed; the loser's unique violation is
 * reported as `StoreError::Conflict`.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::store::{PostStore, StoreError, UserStore};
use crate::shared::{NewPost, Owner, Post, PostFilter, PostPatch};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape of the `posts` table
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    body: String,
    tags: Vec<String>,
    published_date: DateTime<Utc>,
    user_id: String,
    username: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            title: row.title,
            body: row.body,
            tags: row.tags,
            published_date: row.published_date,
            user: Owner {
                id: row.user_id,
                username: row.username,
            },
        }
    }
}

fn map_unique_violation(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Conflict,
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(user)
    }
}

#[async_trait]
impl PostStore for PgStore {
    async fn create(&self, post: NewPost) -> Result<Post, StoreError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (id, title, body, tags, published_date, user_id, username)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, body, tags, published_date, user_id, username
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&post.title)
        .bind(&post.body)
        .bind(&post.tags)
        .bind(Utc::now())
        .bind(&post.user.id)
        .bind(&post.user.username)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, body, tags, published_date, user_id, username
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Post::from))
    }

    async fn list(
        &self,
        filter: &PostFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, StoreError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, body, tags, published_date, user_id, username
            FROM posts
            WHERE ($1::TEXT IS NULL OR username = $1)
              AND ($2::TEXT IS NULL OR $2 = ANY(tags))
            ORDER BY published_date DESC, id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.username.as_deref())
        .bind(filter.tag.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn count(&self, filter: &PostFilter) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM posts
            WHERE ($1::TEXT IS NULL OR username = $1)
              AND ($2::TEXT IS NULL OR $2 = ANY(tags))
            "#,
        )
        .bind(filter.username.as_deref())
        .bind(filter.tag.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, StoreError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                body = COALESCE($3, body),
                tags = COALESCE($4, tags)
            WHERE id = $1
            RETURNING id, title, body, tags, published_date, user_id, username
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.body)
        .bind(patch.tags)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Post::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
