use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::ExportError;
use crate::llm_client::LlmError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("AI backend not configured")]
    SuggesterNotConfigured,

    #[error("Suggestion backend error: {0}")]
    Suggestion(#[from] LlmError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Failed to save resume: {0}")]
    SaveResume(StoreError),

    #[error("Failed to fetch resume: {0}")]
    FetchResume(StoreError),

    #[error("Preview render error: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    /// Status and client-facing message. Backend failures are logged here and
    /// reported with a generic message.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::MalformedBody(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            AppError::SuggesterNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI backend not configured.".to_string(),
            ),
            AppError::Suggestion(e) => {
                tracing::error!("Suggestion backend error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate suggestions".to_string(),
                )
            }
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.public_message().to_string())
            }
            AppError::SaveResume(e) => {
                tracing::error!("Store error on save: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save resume".to_string(),
                )
            }
            AppError::FetchResume(e) => {
                tracing::error!("Store error on fetch: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch resume".to_string(),
                )
            }
            AppError::Render(e) => {
                tracing::error!("Preview render error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render preview".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Error wrapper for the resume endpoints, whose bodies always carry an `ok`
/// flag: `{ "ok": false, "error": "…" }`.
#[derive(Debug)]
pub struct ResumeApiError(pub AppError);

impl From<AppError> for ResumeApiError {
    fn from(err: AppError) -> Self {
        ResumeApiError(err)
    }
}

impl From<JsonRejection> for ResumeApiError {
    fn from(rejection: JsonRejection) -> Self {
        ResumeApiError(AppError::MalformedBody(rejection))
    }
}

impl IntoResponse for ResumeApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();
        (status, Json(json!({ "ok": false, "error": message }))).into_response()
    }
}
