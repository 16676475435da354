use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::{AppError, ResumeApiError};
use crate::models::resume::StoredResume;
use crate::state::AppState;
use crate::store::DEFAULT_TEMPLATE_ID;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResumeRequest {
    pub payload: Option<Value>,
    pub template_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveResumeResponse {
    pub ok: bool,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct GetResumeResponse {
    pub ok: bool,
    pub resume: StoredResume,
}

/// POST /api/resumes
pub async fn handle_save_resume(
    State(state): State<AppState>,
    body: Result<Json<SaveResumeRequest>, JsonRejection>,
) -> Result<Json<SaveResumeResponse>, ResumeApiError> {
    let Json(req) = body?;
    let payload = req
        .payload
        .filter(|p| !p.is_null())
        .ok_or_else(|| AppError::Validation("Missing payload".into()))?;
    let template_id = req
        .template_id
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TEMPLATE_ID.to_string());

    let record = state
        .resumes
        .save(payload, template_id)
        .await
        .map_err(AppError::SaveResume)?;

    Ok(Json(SaveResumeResponse {
        ok: true,
        id: record.id,
    }))
}

/// GET /api/resumes/:id
///
/// An id that is not a UUID cannot name a stored record, so it reports
/// not-found rather than a client error.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetResumeResponse>, ResumeApiError> {
    let not_found = || AppError::NotFound("not found".into());
    let id = Uuid::parse_str(&id).map_err(|_| not_found())?;

    let resume = state
        .resumes
        .get(id)
        .await
        .map_err(AppError::FetchResume)?
        .ok_or_else(not_found)?;

    Ok(Json(GetResumeResponse { ok: true, resume }))
}
