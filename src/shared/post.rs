//! Post Data Structures
//!
//! A post is a small document: title, body, tags, publish time and an
//! embedded reference to the user that wrote it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::user::Identity;

/// Number of posts returned per list page
pub const PAGE_SIZE: i64 = 10;

/// List views cut bodies longer than this many characters
pub const PREVIEW_CHARS: usize = 200;

/// Owner reference embedded in every post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// ID of the user that created the post
    pub id: String,
    /// Username at creation time
    pub username: String,
}

impl From<&Identity> for Owner {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.clone(),
            username: identity.username.clone(),
        }
    }
}

/// A stored post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub published_date: DateTime<Utc>,
    pub user: Owner,
}

impl Post {
    /// Copy of this post with the body shortened for list views
    pub fn preview(mut self) -> Self {
        self.body = truncate_body(&self.body);
        self
    }
}

/// Fields required to create a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub user: Owner,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// List filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Only posts written by this username
    pub username: Option<String>,
    /// Only posts carrying this tag
    pub tag: Option<String>,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        let by_user = self
            .username
            .as_deref()
            .map_or(true, |name| post.user.username == name);
        let by_tag = self
            .tag
            .as_deref()
            .map_or(true, |tag| post.tags.iter().any(|t| t == tag));
        by_user && by_tag
    }
}

/// Shorten a body to `PREVIEW_CHARS` characters followed by `...`
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Number of pages needed for `count` posts; zero posts means zero pages
pub fn last_page(count: i64) -> i64 {
    (count + PAGE_SIZE - 1) / PAGE_SIZE
}
