//! GET /api/suggestions

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use veriscope_application::Suggestions;

use crate::state::AppState;

/// Query parameters for autocomplete.
#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    /// Partial query to complete.
    #[serde(default)]
    pub q: Option<String>,
}

/// Response body for autocomplete.
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    /// Completion candidates, best first.
    pub suggestions: Vec<String>,
}

/// Completes a partial search query. Always answers 200; short
/// queries and provider failures both yield an empty list.
pub async fn handle(
    State(state): State<AppState>,
    Query(query): Query<SuggestionsQuery>,
) -> Json<SuggestionsResponse> {
    let suggestions = Suggestions::new(Arc::clone(&state.suggestions))
        .execute(query.q.as_deref().unwrap_or_default())
        .await;

    Json(SuggestionsResponse { suggestions })
}
