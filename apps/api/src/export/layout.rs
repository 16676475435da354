//! Pagination of a `RenderedResume` onto fixed-size pages.
//!
//! Pure geometry: produces positioned lines that the PDF writer turns into
//! content streams. Coordinates use the PDF convention (origin bottom-left,
//! y grows upward, `y` is the text baseline).

use crate::export::font_metrics::Font;
use crate::render::{RenderedResume, SectionKind};

pub const NAME_SIZE_PT: f32 = 20.0;
pub const HEADING_SIZE_PT: f32 = 14.0;
pub const BODY_SIZE_PT: f32 = 11.0;
/// Line advance as a multiple of the font size.
const LEADING: f32 = 1.35;
/// Extra space above each section heading.
const SECTION_GAP_PT: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

/// Consent text is printed with its spacing as typed; everything else is
/// reflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spacing {
    Collapse,
    Verbatim,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub font: Font,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

struct Cursor {
    geometry: PageGeometry,
    pages: Vec<Page>,
    /// Top of the next line box.
    top: f32,
}

impl Cursor {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Page::default()],
            top: geometry.height - geometry.margin,
        }
    }

    fn current_is_empty(&self) -> bool {
        self.pages.last().map_or(true, |p| p.lines.is_empty())
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.top = self.geometry.height - self.geometry.margin;
    }

    /// Vertical space that is dropped at a page break.
    fn gap(&mut self, pts: f32) {
        if !self.current_is_empty() {
            self.top -= pts;
        }
    }

    fn place(&mut self, text: &str, font: Font, size: f32, align: Align) {
        self.place_with(text, font, size, align, Spacing::Collapse);
    }

    fn place_with(&mut self, text: &str, font: Font, size: f32, align: Align, spacing: Spacing) {
        let g = self.geometry;
        let advance = size * LEADING;
        let metrics = font.metrics();
        let lines = match spacing {
            Spacing::Collapse => metrics.wrap(text, size, g.content_width()),
            Spacing::Verbatim => metrics.wrap_verbatim(text, size, g.content_width()),
        };

        if lines.is_empty() {
            // Blank paragraph line: keep the vertical rhythm.
            self.gap(advance);
            return;
        }

        for line in lines {
            if self.top - advance < g.margin && !self.current_is_empty() {
                self.new_page();
            }
            let x = match align {
                Align::Left => g.margin,
                Align::Center => {
                    let w = font.metrics().width_pt(&line, size);
                    ((g.width - w) / 2.0).max(g.margin)
                }
            };
            let y = self.top - size;
            if let Some(page) = self.pages.last_mut() {
                page.lines.push(PlacedLine {
                    text: line,
                    font,
                    size,
                    x,
                    y,
                });
            }
            self.top -= advance;
        }
    }
}

/// Lays out the resume: centered bold name, contact and DOB lines, then each
/// section as a bold heading followed by its body lines. Consent lines keep
/// their interior whitespace; other lines are reflowed. A new page starts
/// whenever the next line would cross the bottom margin. Always returns at
/// least one page.
pub fn paginate(resume: &RenderedResume, geometry: PageGeometry) -> Vec<Page> {
    let mut cursor = Cursor::new(geometry);

    if !resume.name.is_empty() {
        cursor.place(&resume.name, Font::Bold, NAME_SIZE_PT, Align::Center);
    }
    if !resume.contact.is_empty() {
        cursor.place(&resume.contact, Font::Regular, BODY_SIZE_PT, Align::Center);
    }
    if let Some(dob) = &resume.dob {
        cursor.place(dob, Font::Regular, BODY_SIZE_PT, Align::Center);
    }

    for section in &resume.sections {
        cursor.gap(SECTION_GAP_PT);
        cursor.place(section.kind.title(), Font::Bold, HEADING_SIZE_PT, Align::Left);
        let spacing = match section.kind {
            SectionKind::Consent => Spacing::Verbatim,
            _ => Spacing::Collapse,
        };
        for line in &section.lines {
            cursor.place_with(line, Font::Regular, BODY_SIZE_PT, Align::Left, spacing);
        }
    }

    cursor.pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::sections::RenderedSection;

    fn letter() -> PageGeometry {
        PageGeometry {
            width: 612.0,
            height: 792.0,
            margin: 50.0,
        }
    }

    fn resume_with_lines(n: usize) -> RenderedResume {
        RenderedResume {
            name: "Ann Lee".into(),
            contact: "ann@x.com | 1234567".into(),
            dob: None,
            sections: vec![RenderedSection {
                kind: SectionKind::Experience,
                lines: (0..n).map(|i| format!("Entry number {i}")).collect(),
            }],
        }
    }

    #[test]
    fn test_empty_resume_has_one_page() {
        let empty = RenderedResume {
            name: String::new(),
            contact: String::new(),
            dob: None,
            sections: vec![],
        };
        let pages = paginate(&empty, letter());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].lines.is_empty());
    }

    #[test]
    fn test_name_is_centered_bold() {
        let pages = paginate(&resume_with_lines(1), letter());
        let name = &pages[0].lines[0];
        assert_eq!(name.text, "Ann Lee");
        assert_eq!(name.font, Font::Bold);
        assert_eq!(name.size, NAME_SIZE_PT);
        let w = Font::Bold.metrics().width_pt("Ann Lee", NAME_SIZE_PT);
        assert!((name.x - (612.0 - w) / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_overflow_starts_new_page() {
        let pages = paginate(&resume_with_lines(200), letter());
        assert!(pages.len() > 1);

        let total: usize = pages.iter().map(|p| p.lines.len()).sum();
        // name + contact + heading + 200 body lines
        assert_eq!(total, 203);

        for page in &pages {
            assert!(!page.lines.is_empty());
            for line in &page.lines {
                assert!(line.y >= 50.0 - 1e-3, "below bottom margin: {}", line.y);
                assert!(line.y + line.size <= 792.0 - 50.0 + 1e-3);
            }
        }
    }

    #[test]
    fn test_lines_descend_within_page() {
        let pages = paginate(&resume_with_lines(10), letter());
        let ys: Vec<f32> = pages[0].lines.iter().map(|l| l.y).collect();
        assert!(ys.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_consent_spacing_kept_other_sections_reflowed() {
        let resume = RenderedResume {
            name: String::new(),
            contact: String::new(),
            dob: None,
            sections: vec![
                RenderedSection {
                    kind: SectionKind::Hobbies,
                    lines: vec!["Chess,   Go".into()],
                },
                RenderedSection {
                    kind: SectionKind::Consent,
                    lines: vec!["I   hereby\tdeclare".into()],
                },
            ],
        };
        let pages = paginate(&resume, letter());
        let texts: Vec<&str> = pages[0].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Hobbies", "Chess, Go", "Consent", "I   hereby    declare"]
        );
    }

    #[test]
    fn test_landscape_fits_fewer_lines_per_page() {
        let portrait = paginate(&resume_with_lines(120), letter());
        let landscape = paginate(
            &resume_with_lines(120),
            PageGeometry {
                width: 792.0,
                height: 612.0,
                margin: 50.0,
            },
        );
        assert!(landscape.len() >= portrait.len());
        assert!(landscape[0].lines.len() < portrait[0].lines.len());
    }
}
