//! Chronicles API Server
//!
//! A small self-hosted blog feed: a capped, file-persisted post store, an
//! optional remote feed poller, and an HTML/JSON surface for reading and
//! submitting posts. Uses hexagonal (ports & adapters) architecture for
//! clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::time::MissedTickBehavior;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod page;

#[cfg(test)]
mod test_utils;


use adapters::{HttpFeedClient, JsonFileStore};
use app::PostService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService<JsonFileStore, HttpFeedClient>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Poll the feed immediately, then on every tick. Polls run sequentially
/// within this one task, so a slow fetch delays the next poll instead of
/// overlapping it.
fn spawn_feed_poller(service: Arc<PostService<JsonFileStore, HttpFeedClient>>, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            service.poll_feed().await;
        }
    });
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chronicles_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Chronicles API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let store = Arc::new(JsonFileStore::new(config.store_path.clone()));
    let feed_client = config
        .feed_url
        .clone()
        .map(|url| Arc::new(HttpFeedClient::new(url)));

    if config.feed_enabled() {
        tracing::info!(
            "Feed polling enabled, every {}s",
            config.poll_interval_secs
        );
    } else {
        tracing::info!("Feed polling disabled (no FEED_URL configured)");
    }

    // Create application services
    let post_service = Arc::new(PostService::new(store, feed_client));

    spawn_feed_poller(
        post_service.clone(),
        Duration::from_secs(config.poll_interval_secs),
    );

    // Create app state
    let state = AppState {
        posts: post_service,
    };

    // Rate limiting config for the public write endpoint: 2 req/sec
    // sustained, burst of 5, keyed by client IP from the socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    let rate_limited_routes = Router::new()
        .route("/posts", post(handlers::create_post))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health))
        // The chronicles page and post list
        .route("/", get(handlers::get_index))
        .route("/posts", get(handlers::list_posts))
        // Merge rate-limited routes
        .merge(rate_limited_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
