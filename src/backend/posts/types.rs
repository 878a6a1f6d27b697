//! Post Request Types

use serde::{Deserialize, Deserializer, Serialize};

use crate::backend::error::BackendError;
use crate::shared::{PostFilter, PostPatch, SharedError, Validate};

/// Body of POST /api/posts
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WritePostRequest {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl Validate for WritePostRequest {
    fn validate(&self) -> Result<(), SharedError> {
        non_empty("title", &self.title)?;
        non_empty("body", &self.body)?;
        valid_tags(&self.tags)
    }
}

/// Body of PATCH /api/posts/{id}
///
/// An absent field is left unchanged. An explicit `null` is a decode error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePostRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub tags: Option<Vec<String>>,
}

/// Decode a field that, when present, must hold a value
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl Validate for UpdatePostRequest {
    fn validate(&self) -> Result<(), SharedError> {
        if let Some(title) = &self.title {
            non_empty("title", title)?;
        }
        if let Some(body) = &self.body {
            non_empty("body", body)?;
        }
        if let Some(tags) = &self.tags {
            valid_tags(tags)?;
        }
        Ok(())
    }
}

impl From<UpdatePostRequest> for PostPatch {
    fn from(request: UpdatePostRequest) -> Self {
        PostPatch {
            title: request.title,
            body: request.body,
            tags: request.tags,
        }
    }
}

/// Query string of GET /api/posts
///
/// `page` stays a string here so a non-numeric value becomes a JSON 400 from
/// `page()` rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub username: Option<String>,
    pub tag: Option<String>,
}

impl ListQuery {
    /// Requested page, 1 when absent or empty
    pub fn page(&self) -> Result<i64, BackendError> {
        let raw = self.page.as_deref().unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(1);
        }
        match raw.trim().parse::<i64>() {
            Ok(page) if page >= 1 => Ok(page),
            _ => Err(BackendError::bad_request(format!("invalid page: {raw}"))),
        }
    }

    pub fn filter(&self) -> PostFilter {
        PostFilter {
            username: self.username.clone().filter(|u| !u.is_empty()),
            tag: self.tag.clone().filter(|t| !t.is_empty()),
        }
    }
}

fn non_empty(field: &str, value: &str) -> Result<(), SharedError> {
    if value.is_empty() {
        return Err(SharedError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn valid_tags(tags: &[String]) -> Result<(), SharedError> {
    if tags.iter().any(|tag| tag.is_empty()) {
        return Err(SharedError::validation("tags", "tags must not be empty strings"));
    }
    Ok(())
}
