use axum::{
    extract::{rejection::JsonRejection, Path},
    response::Html,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::payload::ResumePayload;
use crate::render::{render_preview, TemplateVariant};

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub payload: Option<ResumePayload>,
}

/// POST /api/preview/:template_id
pub async fn handle_preview(
    Path(template_id): Path<String>,
    body: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Html<String>, AppError> {
    let variant = template_id
        .parse::<TemplateVariant>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    let Json(req) = body?;
    let payload = req
        .payload
        .ok_or_else(|| AppError::Validation("Missing payload".into()))?;

    let html = render_preview(&payload, variant).to_html()?;
    Ok(Html(html))
}
