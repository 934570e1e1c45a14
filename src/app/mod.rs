//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod post_service;

pub use post_service::{merge_posts, PostService};
