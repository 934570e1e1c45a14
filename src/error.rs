//! Unified error types for the Chronicles API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Storage-layer errors
//! - `FeedError`: Remote feed client errors
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Remote feed client errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Feed responded with status {status}")]
    Api { status: u16 },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Feed payload is not an array")]
    UnexpectedPayload,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Domain(DomainError::Storage(msg)) => {
                tracing::error!("Storage error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Feed(e) => {
                tracing::error!("Feed error: {}", e);
                (StatusCode::BAD_GATEWAY, "Feed error")
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
        });

        (status, body).into_response()
    }
}
