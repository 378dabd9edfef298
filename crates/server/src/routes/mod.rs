//! API routes.

mod explain;
mod news;
mod predict;
mod suggestions;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the API router over the given state.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/predict", post(predict::handle))
        .route("/api/explain", post(explain::handle))
        .route("/api/live-news", get(news::handle))
        .route("/api/suggestions", get(suggestions::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
