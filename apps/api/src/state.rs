use std::sync::Arc;

use crate::store::ResumeRepository;
use crate::suggestions::TextSuggester;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres-backed in deployment; in-memory when no database is configured.
    pub resumes: Arc<dyn ResumeRepository>,
    /// `None` when no API key is configured; suggestion calls then report
    /// "AI backend not configured."
    pub suggester: Option<Arc<dyn TextSuggester>>,
}
