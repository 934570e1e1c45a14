use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    /// Path of the JSON file holding the persisted post list
    pub store_path: PathBuf,
    /// Remote feed URL; polling is disabled when unset or empty
    pub feed_url: Option<String>,
    /// Seconds between feed polls
    pub poll_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            store_path: env::var("STORE_PATH")
                .unwrap_or_else(|_| "chronicles_posts.json".to_string())
                .into(),
            feed_url: env::var("FEED_URL").ok().filter(|url| !url.trim().is_empty()),
            poll_interval_secs: env::var("FEED_POLL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Check if feed polling is configured
    pub fn feed_enabled(&self) -> bool {
        self.feed_url.is_some()
    }
}
