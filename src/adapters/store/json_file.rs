//! File-backed post store
//!
//! Persists the post list as a single JSON array in one file. A missing or
//! malformed file reads as an empty list; the caller never sees a read
//! error for bad contents.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entities::Post;
use crate::domain::ports::PostStore;
use crate::error::DomainError;

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PostStore for JsonFileStore {
    async fn read(&self) -> Result<Vec<Post>, DomainError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                tracing::warn!("Failed to read post store {}: {}", self.path.display(), e);
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(posts) => Ok(posts),
            Err(e) => {
                tracing::warn!("Malformed post store {}: {}", self.path.display(), e);
                Ok(Vec::new())
            }
        }
    }

    async fn write(&self, posts: &[Post]) -> Result<(), DomainError> {
        let raw = serde_json::to_string(posts).map_err(|e| DomainError::Storage(e.to_string()))?;

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| DomainError::Storage(e.to_string()))
    }
}
