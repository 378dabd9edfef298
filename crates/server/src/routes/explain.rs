//! POST /api/explain

use axum::Json;
use serde::{Deserialize, Serialize};
use veriscope_application::Explain;

use crate::error::ApiError;

/// Request body for an explanation.
#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    /// Text to explain.
    #[serde(default)]
    pub text: Option<String>,
}

/// Response body carrying the rendered explanation.
#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    /// Self-contained HTML fragment.
    pub html: String,
}

/// Renders a word-importance explanation for the submitted text.
pub async fn handle(
    Json(request): Json<ExplainRequest>,
) -> Result<Json<ExplainResponse>, ApiError> {
    let text = request
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(ApiError::text_required)?;

    tracing::debug!(text_len = text.len(), "explain requested");

    let html = Explain::new()
        .execute(&text)
        .map_err(|e| ApiError::Internal(e.into()))?;

    Ok(Json(ExplainResponse { html }))
}
