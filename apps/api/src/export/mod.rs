// Document export: the rendered resume laid out onto fixed pages and written
// as PDF (lopdf) or DOCX (docx-rs).
// Both writers are synchronous and CPU-bound; handlers run them inside
// tokio::task::spawn_blocking.

pub mod docx;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod font_metrics;
pub mod handlers;
pub mod layout;
pub mod pdf;

use serde::Deserialize;
use thiserror::Error;

pub use docx::render_docx;
pub use pdf::render_pdf;

/// Fixed page margin for PDF output, in points.
pub const PDF_MARGIN_PT: f32 = 50.0;
/// Fixed page margin for DOCX output, in twips (0.5in).
pub const DOCX_MARGIN_TWIPS: u32 = 720;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),
}

impl ExportError {
    /// Message reported to the client; the detail stays in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ExportError::Pdf(_) => "Failed to generate PDF",
            ExportError::Docx(_) => "Failed to generate DOCX",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
}

impl PageSize {
    /// Case-insensitive; anything unrecognised falls back to A4.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "letter" => PageSize::Letter,
            "legal" => PageSize::Legal,
            _ => PageSize::A4,
        }
    }

    /// Portrait (width, height) in points.
    pub fn points(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
        }
    }

    /// Portrait (width, height) in twips.
    pub fn twips(self) -> (u32, u32) {
        match self {
            PageSize::A4 => (11900, 16840),
            PageSize::Letter => (12240, 15840),
            PageSize::Legal => (12240, 20160),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Case-insensitive; anything other than `landscape` is portrait.
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("landscape") {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Applies the orientation to portrait dimensions.
    pub fn orient<T>(self, (width, height): (T, T)) -> (T, T) {
        match self {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub page_size: PageSize,
    pub orientation: Orientation,
}

impl ExportOptions {
    pub fn from_labels(page_size: Option<&str>, orientation: Option<&str>) -> Self {
        Self {
            page_size: page_size.map(PageSize::from_label).unwrap_or_default(),
            orientation: orientation.map(Orientation::from_label).unwrap_or_default(),
        }
    }

    pub fn page_points(&self) -> (f32, f32) {
        self.orientation.orient(self.page_size.points())
    }

    pub fn page_twips(&self) -> (u32, u32) {
        self.orientation.orient(self.page_size.twips())
    }
}

/// Serde helper for request bodies carrying the raw option labels.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLabels {
    pub page_size: Option<String>,
    pub orientation: Option<String>,
}

impl From<&ExportLabels> for ExportOptions {
    fn from(labels: &ExportLabels) -> Self {
        ExportOptions::from_labels(labels.page_size.as_deref(), labels.orientation.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_labels_fall_back() {
        let opts = ExportOptions::from_labels(Some("Tabloid"), Some("sideways"));
        assert_eq!(opts.page_size, PageSize::A4);
        assert_eq!(opts.orientation, Orientation::Portrait);
        assert_eq!(ExportOptions::from_labels(None, None), ExportOptions::default());
    }

    #[test]
    fn test_labels_case_insensitive() {
        let opts = ExportOptions::from_labels(Some("letter"), Some("LANDSCAPE"));
        assert_eq!(opts.page_size, PageSize::Letter);
        assert_eq!(opts.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        let opts = ExportOptions::from_labels(Some("Legal"), Some("landscape"));
        assert_eq!(opts.page_points(), (1008.0, 612.0));
        assert_eq!(opts.page_twips(), (20160, 12240));
    }

    #[test]
    fn test_portrait_a4_twips() {
        let opts = ExportOptions::from_labels(Some("A4"), Some("portrait"));
        assert_eq!(opts.page_twips(), (11900, 16840));
    }
}
