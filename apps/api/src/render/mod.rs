// Preview rendering: one formatting pass (`sections`) feeds the three layout
// variants (`templates`) and the document exporter.

pub mod handlers;
pub mod sections;
pub mod templates;

pub use sections::{render_resume, RenderedResume, SectionKind, Target};
pub use templates::{render_preview, TemplateVariant};
