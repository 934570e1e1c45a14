//! Post domain entity
//!
//! Represents a single chronicle entry: a blog-like post with a title,
//! body, optional sender, and an ISO-8601 timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of posts retained in the store; older entries are dropped.
pub const MAX_STORED_POSTS: usize = 100;

/// A chronicle post
///
/// The `date` field is kept as the string it arrived with. Submitted posts
/// carry an RFC 3339 timestamp stamped at creation; feed posts carry
/// whatever the remote side sent, which may not parse at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub content: String,
    /// Sender attribution, omitted when empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub date: String,
}

impl Post {
    /// Composite key used to de-duplicate posts during a feed merge.
    pub fn dedup_key(&self) -> String {
        format!("{}|{}", self.title, self.date)
    }

    /// Parse the post date for display. Accepts RFC 3339 timestamps and
    /// bare `YYYY-MM-DD` dates.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        if let Ok(t) = DateTime::parse_from_rfc3339(&self.date) {
            return Some(t.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
    }

    /// Sort key for date-descending ordering. Unparsable dates sort as
    /// earliest, so they collapse to the end of a newest-first list.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.parsed_date().unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}
