//! Post store port trait
//!
//! The store holds the full ordered post list as one unit; every mutation
//! is a whole-list read-modify-write.

use async_trait::async_trait;

use crate::domain::entities::Post;
use crate::error::DomainError;

/// Durable storage for the post list
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Read the persisted list. Absent or unreadable state degrades to an
    /// empty list rather than an error.
    async fn read(&self) -> Result<Vec<Post>, DomainError>;

    /// Replace the persisted list with `posts`.
    async fn write(&self, posts: &[Post]) -> Result<(), DomainError>;
}
