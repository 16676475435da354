use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, PageMargin, PageOrientationType, Paragraph, Run};
use tracing::debug;

use crate::export::{ExportError, ExportOptions, Orientation, DOCX_MARGIN_TWIPS};
use crate::render::RenderedResume;

/// Half-point sizes, as the DOCX run properties expect them.
const NAME_SIZE: usize = 32;
const HEADING_SIZE: usize = 26;
const BODY_SIZE: usize = 22;

/// Page geometry of the generated document, in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocxPageGeometry {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl DocxPageGeometry {
    pub fn for_options(options: ExportOptions) -> Self {
        let (width, height) = options.page_twips();
        Self {
            width,
            height,
            margin: DOCX_MARGIN_TWIPS,
        }
    }
}

pub fn render_docx(resume: &RenderedResume, options: ExportOptions) -> Result<Vec<u8>, ExportError> {
    let mut cursor = Cursor::new(Vec::new());
    build_docx(resume, options)
        .build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = cursor.into_inner();
    debug!("Rendered DOCX: {} bytes", bytes.len());
    Ok(bytes)
}

/// Document model for the resume. Landscape pages carry both the swapped size
/// and `w:orient`, since Word reads the flag rather than inferring it.
fn build_docx(resume: &RenderedResume, options: ExportOptions) -> Docx {
    let geometry = DocxPageGeometry::for_options(options);
    let margin = geometry.margin as i32;

    let mut docx = Docx::new()
        .page_size(geometry.width, geometry.height)
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        );
    if options.orientation == Orientation::Landscape {
        docx = docx.page_orient(PageOrientationType::Landscape);
    }

    if !resume.name.is_empty() {
        docx = docx.add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(&resume.name).bold().size(NAME_SIZE))
                .align(AlignmentType::Center),
        );
    }
    for line in std::iter::once(&resume.contact)
        .filter(|c| !c.is_empty())
        .chain(resume.dob.iter())
    {
        docx = docx.add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(line).size(BODY_SIZE))
                .align(AlignmentType::Center),
        );
    }

    for section in &resume.sections {
        docx = docx.add_paragraph(
            Paragraph::new().add_run(
                Run::new()
                    .add_text(section.kind.title())
                    .bold()
                    .underline("single")
                    .size(HEADING_SIZE),
            ),
        );
        for line in &section.lines {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_text(line).size(BODY_SIZE)),
            );
        }
    }
    docx
}
