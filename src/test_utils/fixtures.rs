//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::Post;

/// Create a test post with default values
pub fn test_post() -> Post {
    Post {
        title: "Quarterly ledger closed".to_string(),
        content: "All accounts reconciled.".to_string(),
        from: Some("marge@example.com".to_string()),
        date: "2024-01-15T09:30:00Z".to_string(),
    }
}

/// Create a test post with a specific title
pub fn test_post_titled(title: &str) -> Post {
    Post {
        title: title.to_string(),
        content: format!("Body of {}", title),
        from: None,
        date: "2024-01-15T09:30:00Z".to_string(),
    }
}

/// Create a test post with a specific title and date, no sender
pub fn test_post_dated(title: &str, date: &str) -> Post {
    Post {
        title: title.to_string(),
        content: format!("Body of {}", title),
        from: None,
        date: date.to_string(),
    }
}
