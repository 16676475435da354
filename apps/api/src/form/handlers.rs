use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::form::gating::TierGate;
use crate::form::validation::{validate, FieldErrors};
use crate::models::payload::ResumePayload;

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub payload: Option<ResumePayload>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub ok: bool,
    pub errors: FieldErrors,
    pub gate: TierGate,
}

/// POST /api/form/validate
///
/// Server-side check of a collected payload: the same field rules and tier
/// gating the form applies before submission.
pub async fn handle_validate(
    body: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, AppError> {
    let Json(req) = body?;
    let payload = req
        .payload
        .ok_or_else(|| AppError::Validation("Missing payload".into()))?;

    let errors = validate(&payload);
    Ok(Json(ValidateResponse {
        ok: errors.is_empty(),
        gate: TierGate::from_education(&payload.education),
        errors,
    }))
}
