//! Shared Module
//!
//! Plain data types used across the backend: the public user identity, post
//! documents and request validation errors. Nothing in here touches HTTP or
//! the database.

/// Request shape errors
pub mod error;

/// Public user identity and username rules
pub mod user;

/// Post documents, filters and list helpers
pub mod post;

pub use error::{SharedError, Validate};
pub use post::{NewPost, Owner, Post, PostFilter, PostPatch};
pub use user::Identity;
