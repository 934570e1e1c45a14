//! HTTP handlers
//!
//! Axum request handlers for the chronicles endpoints.

pub mod posts;

pub use posts::{create_post, get_index, list_posts};
