/**
 * In-Memory Store
 *
 * Implements `UserStore` and `PostStore` over `tokio::sync::RwLock`-guarded
 * collections. Each trait call takes the lock once, so a single call is
 * atomic; nothing spans calls.
 *
 * Posts are kept in insertion order, which is also publish order, so the
 * newest post is the last element.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::store::{PostStore, StoreError, UserStore};
use crate::shared::{NewPost, Post, PostFilter, PostPatch};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    posts: RwLock<Vec<Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return Err(StoreError::Conflict);
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn create(&self, post: NewPost) -> Result<Post, StoreError> {
        let post = Post {
            id: Uuid::new_v4(),
            title: post.title,
            body: post.body,
            tags: post.tags,
            published_date: Utc::now(),
            user: post.user,
        };
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn list(
        &self,
        filter: &PostFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .rev()
            .filter(|p| filter.matches(p))
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &PostFilter) -> Result<i64, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().filter(|p| filter.matches(p)).count() as i64)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, StoreError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(body) = patch.body {
            post.body = body;
        }
        if let Some(tags) = patch.tags {
            post.tags = tags;
        }
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() != before)
    }
}
