//! Posts Module
//!
//! CRUD over post documents, paginated ten at a time.

pub mod handlers;
pub mod types;

pub use handlers::{list_posts, read_post, remove_post, update_post, write_post};
