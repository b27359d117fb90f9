// ============================================================================
// ANONYMOUS MESSAGE BOARD
// ============================================================================

// - Posts signed with a pseudonym derived from the poster's IP
// - Per-IP daily post limit, silently enforced
// - Board flushed weekly, or when it fills up
// - Posts saved to JSON on shutdown, restored on startup
// - Append-only audit log of accepted posts

pub mod audit;
pub mod config;
pub mod constants;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod models;
pub mod names;
pub mod persistence;
pub mod routes;
pub mod sanitize;
pub mod scheduler;
pub mod server;
pub mod states;
pub mod store;
pub mod views;

pub use states::AppState;

use axum::{
    Router,
    routing::get,
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the router: the feed on `/`, health check, static assets.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(routes::get_feed).post(routes::create_post))
        .route("/health", get(routes::health_check))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
