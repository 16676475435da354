use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub payload: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestions: String,
}

/// POST /api/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    body: Result<Json<SuggestionRequest>, JsonRejection>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let suggester = state
        .suggester
        .as_ref()
        .ok_or(AppError::SuggesterNotConfigured)?;
    let Json(req) = body?;
    let payload = req
        .payload
        .filter(|p| !p.is_null())
        .ok_or_else(|| AppError::Validation("Missing payload".into()))?;

    let suggestions = suggester.suggest(&payload).await?;
    Ok(Json(SuggestionResponse { suggestions }))
}
