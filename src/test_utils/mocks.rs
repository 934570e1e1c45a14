//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::Post;
use crate::domain::ports::{ChronicleFeed, PostStore};
use crate::error::{DomainError, FeedError};

// ============================================================================
// In-Memory Post Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostStore {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store for testing
    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        *self.posts.write().unwrap() = posts;
        self
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn read(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.read().unwrap().clone())
    }

    async fn write(&self, posts: &[Post]) -> Result<(), DomainError> {
        *self.posts.write().unwrap() = posts.to_vec();
        Ok(())
    }
}

// ============================================================================
// Mock Chronicle Feed
// ============================================================================

/// Failure modes the mock feed can simulate
#[derive(Clone, Copy)]
pub enum FeedFailure {
    /// Non-success HTTP status
    Status(u16),
    /// Body parsed but was not a JSON array
    NotAnArray,
    /// Body was not valid JSON at all
    Garbled,
}

#[derive(Default)]
pub struct MockChronicleFeed {
    posts: Vec<Post>,
    failure: Option<FeedFailure>,
}

impl MockChronicleFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond with the given posts
    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    /// Fail every fetch with the given failure mode
    pub fn with_failure(mut self, failure: FeedFailure) -> Self {
        self.failure = Some(failure);
        self
    }
}

#[async_trait]
impl ChronicleFeed for MockChronicleFeed {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError> {
        match self.failure {
            Some(FeedFailure::Status(status)) => Err(FeedError::Api { status }),
            Some(FeedFailure::NotAnArray) => Err(FeedError::UnexpectedPayload),
            Some(FeedFailure::Garbled) => {
                Err(FeedError::Deserialization("expected value".to_string()))
            }
            None => Ok(self.posts.clone()),
        }
    }
}
