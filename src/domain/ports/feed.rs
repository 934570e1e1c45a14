//! Remote feed port trait
//!
//! Defines the interface for fetching posts from the optional remote feed.

use async_trait::async_trait;

use crate::domain::entities::Post;
use crate::error::FeedError;

/// Client for the remote chronicle feed
#[async_trait]
pub trait ChronicleFeed: Send + Sync {
    /// Fetch the current remote post list. Implementations validate the
    /// payload shape, so a returned `Vec<Post>` contains only well-formed
    /// entries.
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError>;
}
