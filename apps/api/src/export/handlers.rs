use axum::{
    extract::rejection::JsonRejection,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::export::{render_docx, render_pdf, ExportError, ExportLabels, ExportOptions};
use crate::models::payload::ResumePayload;
use crate::render::{render_resume, RenderedResume, Target};

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub payload: Option<ResumePayload>,
    #[serde(flatten)]
    pub labels: ExportLabels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    fn disposition(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "attachment; filename=resume.pdf",
            ExportFormat::Docx => "attachment; filename=resume.docx",
        }
    }

    fn render(self, resume: &RenderedResume, options: ExportOptions) -> Result<Vec<u8>, ExportError> {
        match self {
            ExportFormat::Pdf => render_pdf(resume, options),
            ExportFormat::Docx => render_docx(resume, options),
        }
    }

    fn failure(self, detail: String) -> ExportError {
        match self {
            ExportFormat::Pdf => ExportError::Pdf(detail),
            ExportFormat::Docx => ExportError::Docx(detail),
        }
    }
}

/// POST /api/export/pdf
pub async fn handle_export_pdf(
    body: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    export(body, ExportFormat::Pdf).await
}

/// POST /api/export/docx
pub async fn handle_export_docx(
    body: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    export(body, ExportFormat::Docx).await
}

async fn export(
    body: Result<Json<ExportRequest>, JsonRejection>,
    format: ExportFormat,
) -> Result<Response, AppError> {
    let Json(req) = body?;
    let payload = req
        .payload
        .ok_or_else(|| AppError::Validation("Missing payload".into()))?;
    let options = ExportOptions::from(&req.labels);

    // Rendering is CPU-bound; the bytes only leave once the whole document is built.
    let bytes = tokio::task::spawn_blocking(move || {
        let resume = render_resume(&payload, Target::Document);
        format.render(&resume, options)
    })
    .await
    .map_err(|e| format.failure(e.to_string()))??;

    info!(
        "Exported {:?} ({:?} {:?}): {} bytes",
        format,
        options.page_size,
        options.orientation,
        bytes.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type()),
            (header::CONTENT_DISPOSITION, format.disposition()),
        ],
        bytes,
    )
        .into_response())
}
