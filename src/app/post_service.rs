//! Post service
//!
//! Owns the capped, ordered post list: loads it from the store, prepends
//! user submissions, and reconciles it with the optional remote feed.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{Post, MAX_STORED_POSTS};
use crate::domain::ports::{ChronicleFeed, PostStore};
use crate::error::DomainError;

/// Service for reading and mutating the post list
pub struct PostService<S, F>
where
    S: PostStore,
    F: ChronicleFeed,
{
    store: Arc<S>,
    feed: Option<Arc<F>>,
}

impl<S, F> PostService<S, F>
where
    S: PostStore,
    F: ChronicleFeed,
{
    pub fn new(store: Arc<S>, feed: Option<Arc<F>>) -> Self {
        Self { store, feed }
    }

    /// Current post list, newest first. Storage faults degrade to empty
    /// inside the store adapter, so this effectively always succeeds.
    pub async fn load_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.store.read().await
    }

    /// Prepend a post, cap the list at [`MAX_STORED_POSTS`] (dropping from
    /// the tail), and persist. The caller has already trimmed the fields
    /// and rejected blank title/content.
    pub async fn add_post(&self, post: Post) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.store.read().await?;
        posts.insert(0, post);
        posts.truncate(MAX_STORED_POSTS);
        self.store.write(&posts).await?;
        Ok(posts)
    }

    /// One feed poll: fetch, merge into the local list, persist. A no-op
    /// when no feed is configured. Every failure path logs and leaves the
    /// store untouched; nothing propagates to the caller.
    pub async fn poll_feed(&self) {
        let Some(feed) = &self.feed else {
            return;
        };

        let remote = match feed.fetch_posts().await {
            Ok(remote) => remote,
            Err(e) => {
                tracing::warn!("Feed poll failed: {}", e);
                return;
            }
        };

        let local = match self.store.read().await {
            Ok(local) => local,
            Err(e) => {
                tracing::warn!("Skipping feed merge, store read failed: {}", e);
                return;
            }
        };

        let merged = merge_posts(remote, local);
        tracing::debug!("Feed merge produced {} posts", merged.len());

        if let Err(e) = self.store.write(&merged).await {
            tracing::warn!("Failed to persist merged posts: {}", e);
        }
    }
}

/// Merge remote posts into the local list.
///
/// Remote entries come first, so on a duplicate `title|date` key the
/// remote version survives. The result is sorted date-descending
/// (unparsable dates last) and capped at [`MAX_STORED_POSTS`].
pub fn merge_posts(remote: Vec<Post>, local: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    let mut merged: Vec<Post> = remote
        .into_iter()
        .chain(local)
        .filter(|post| seen.insert(post.dedup_key()))
        .collect();

    merged.sort_by_key(|post| Reverse(post.timestamp()));
    merged.truncate(MAX_STORED_POSTS);
    merged
}
