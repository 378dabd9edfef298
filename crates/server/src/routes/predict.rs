//! POST /api/predict

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use std::sync::Arc;
use veriscope_application::{Predict, PredictInput};
use veriscope_domain::{ModelType, PredictionReport};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for a prediction.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Text to analyze.
    #[serde(default)]
    pub text: Option<String>,
    /// Model selection label; unknown labels use the deep model.
    #[serde(default)]
    pub model_type: Option<String>,
}

/// Analyzes the submitted text and returns the full report.
///
/// Invalid sentences still answer 200 with the `NOT A VALID SENTENCE`
/// report; only a missing `text` field is a client error.
pub async fn handle(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictionReport>, ApiError> {
    // Only a missing or empty field is a client error; whitespace-only
    // text still goes through validation and earns the invalid report.
    let text = request
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(ApiError::text_required)?;

    let model = request
        .model_type
        .as_deref()
        .map_or(ModelType::DeepLearning, ModelType::from_label);

    let report = Predict::new(Arc::clone(&state.evidence))
        .execute(PredictInput { text, model })
        .await;

    Ok(Json(report))
}
