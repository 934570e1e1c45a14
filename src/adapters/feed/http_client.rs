//! HTTP feed client implementation
//!
//! Fetches the remote feed and validates the payload at the boundary:
//! the body must be a JSON array, and each element must carry string
//! `title`, `content`, and `date` fields before it is trusted.

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use serde_json::Value;

use crate::domain::entities::Post;
use crate::domain::ports::ChronicleFeed;
use crate::error::FeedError;

pub struct HttpFeedClient {
    http: Client,
    url: String,
}

impl HttpFeedClient {
    pub fn new(url: String) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl ChronicleFeed for HttpFeedClient {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FeedError> {
        let response = self
            .http
            .get(&self.url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Api {
                status: status.as_u16(),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| FeedError::Deserialization(e.to_string()))?;

        let Value::Array(entries) = payload else {
            return Err(FeedError::UnexpectedPayload);
        };

        let mut posts = Vec::with_capacity(entries.len());
        for entry in &entries {
            match parse_post(entry) {
                Some(post) => posts.push(post),
                None => tracing::debug!("Skipping malformed feed entry: {}", entry),
            }
        }

        Ok(posts)
    }
}

/// Validate one feed entry. Returns `None` unless `title`, `content`, and
/// `date` are present as strings with non-blank title and content.
fn parse_post(value: &Value) -> Option<Post> {
    let title = value.get("title")?.as_str()?.trim();
    let content = value.get("content")?.as_str()?.trim();
    let date = value.get("date")?.as_str()?;
    if title.is_empty() || content.is_empty() || date.is_empty() {
        return None;
    }

    let from = value
        .get("from")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string);

    Some(Post {
        title: title.to_string(),
        content: content.to_string(),
        from,
        date: date.to_string(),
    })
}
