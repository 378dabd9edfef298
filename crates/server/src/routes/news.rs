//! GET /api/live-news

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use veriscope_application::LiveNews;
use veriscope_domain::NewsArticle;

use crate::state::AppState;

/// Query parameters for the live-news feed.
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    /// Topic to search; defaults to general news.
    #[serde(default)]
    pub topic: Option<String>,
    /// Region scope; `india` narrows the query.
    #[serde(default)]
    pub region: Option<String>,
}

/// Response body for the feed.
#[derive(Debug, Serialize)]
pub struct NewsResponse {
    /// Matching articles, newest first.
    pub articles: Vec<NewsArticle>,
    /// Provider failure message, when the feed could not be fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Fetches recent articles for the requested topic and region.
///
/// Provider failures answer 500 with an empty article list so feed
/// consumers always get a well-formed body.
pub async fn handle(State(state): State<AppState>, Query(query): Query<NewsQuery>) -> Response {
    let result = LiveNews::new(Arc::clone(&state.news))
        .execute(query.topic.as_deref(), query.region.as_deref())
        .await;

    match result {
        Ok(articles) => Json(NewsResponse {
            articles,
            error: None,
        })
        .into_response(),
        Err(error) => {
            tracing::error!(%error, "live news fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(NewsResponse {
                    articles: Vec::new(),
                    error: Some("Failed to fetch news".to_string()),
                }),
            )
                .into_response()
        }
    }
}
