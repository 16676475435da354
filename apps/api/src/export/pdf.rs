use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::debug;

use crate::export::font_metrics::Font;
use crate::export::layout::{paginate, Page, PageGeometry};
use crate::export::{ExportError, ExportOptions, PDF_MARGIN_PT};
use crate::render::RenderedResume;

/// Builds the whole PDF in memory. No creation date or document id is
/// written, so equal input yields equal bytes.
pub fn render_pdf(resume: &RenderedResume, options: ExportOptions) -> Result<Vec<u8>, ExportError> {
    let (width, height) = options.page_points();
    let geometry = PageGeometry {
        width,
        height,
        margin: PDF_MARGIN_PT,
    };
    let pages = paginate(resume, geometry);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let fonts_id = doc.add_object(dictionary! {
        Font::Regular.resource_name() => font_dictionary(Font::Regular),
        Font::Bold.resource_name() => font_dictionary(Font::Bold),
    });
    let resources_id = doc.add_object(dictionary! { "Font" => fonts_id });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in &pages {
        let content_id = add_content_stream(&mut doc, page)?;
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let media_box: Vec<Object> = vec![
        Object::Integer(0),
        Object::Integer(0),
        width.into(),
        height.into(),
    ];
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    debug!("Rendered PDF: {} page(s), {} bytes", page_count, bytes.len());
    Ok(bytes)
}

fn font_dictionary(font: Font) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn add_content_stream(doc: &mut Document, page: &Page) -> Result<ObjectId, ExportError> {
    let mut operations = Vec::with_capacity(page.lines.len() * 4);
    for line in &page.lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![line.font.resource_name().into(), line.size.into()],
        ));
        operations.push(Operation::new("Td", vec![line.x.into(), line.y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(&line.text), StringFormat::Literal)],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    let encoded = Content { operations }
        .encode()
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(doc.add_object(Stream::new(Dictionary::new(), encoded)))
}

/// Maps text onto WinAnsiEncoding. Latin-1 passes through, the typographic
/// punctuation WinAnsi places in 0x80..0x9F is remapped, anything else
/// becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2026}' => 0x85,
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
