pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::form::handlers as form;
use crate::render::handlers as render;
use crate::state::AppState;
use crate::store::handlers as store;
use crate::suggestions::handlers as suggestions;

/// Payloads carry base64 photos and signatures inline.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::banner_handler))
        .route("/health", get(health::health_handler))
        // Document export
        .route("/api/export/pdf", post(export::handle_export_pdf))
        .route("/api/export/docx", post(export::handle_export_docx))
        // Suggestion proxy
        .route("/api/suggestions", post(suggestions::handle_suggestions))
        // Resume store
        .route("/api/resumes", post(store::handle_save_resume))
        .route("/api/resumes/:id", get(store::handle_get_resume))
        // Preview and form checks
        .route("/api/preview/:template_id", post(render::handle_preview))
        .route("/api/form/validate", post(form::handle_validate))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
