//! The three preview layouts. Each arranges the same `RenderedResume` into
//! regions; none of them chooses or formats fields on its own.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use askama::Template;
use serde::{Deserialize, Serialize};

use crate::models::payload::ResumePayload;
use crate::render::sections::{render_resume, RenderedResume, SectionKind, Target};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateVariant {
    #[default]
    #[serde(rename = "template-classic")]
    Classic,
    #[serde(rename = "template-modern")]
    Modern,
    #[serde(rename = "template-compact")]
    Compact,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 3] = [
        TemplateVariant::Classic,
        TemplateVariant::Modern,
        TemplateVariant::Compact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TemplateVariant::Classic => "template-classic",
            TemplateVariant::Modern => "template-modern",
            TemplateVariant::Compact => "template-compact",
        }
    }

    fn stylesheet(self) -> &'static str {
        match self {
            TemplateVariant::Classic => CLASSIC_CSS,
            TemplateVariant::Modern => MODERN_CSS,
            TemplateVariant::Compact => COMPACT_CSS,
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTemplate(pub String);

impl fmt::Display for UnknownTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown template '{}'", self.0)
    }
}

impl std::error::Error for UnknownTemplate {}

impl FromStr for TemplateVariant {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateVariant::ALL
            .into_iter()
            .find(|v| v.id() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Display document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionRole {
    Header,
    Sidebar,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Name,
    Contact,
    Section(SectionKind),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Empty when the block has no visible heading.
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub role: RegionRole,
    pub blocks: Vec<Block>,
}

impl Region {
    /// HTML element used for this region.
    pub fn tag(&self) -> &'static str {
        match self.role {
            RegionRole::Header => "header",
            RegionRole::Sidebar => "aside",
            RegionRole::Main => "main",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayDocument {
    pub variant: TemplateVariant,
    pub regions: Vec<Region>,
}

impl DisplayDocument {
    pub fn section_kinds(&self) -> BTreeSet<SectionKind> {
        self.regions
            .iter()
            .flat_map(|r| r.blocks.iter())
            .filter_map(|b| match b.kind {
                BlockKind::Section(kind) => Some(kind),
                _ => None,
            })
            .collect()
    }

    /// All paragraphs of every section block, independent of arrangement.
    pub fn section_text(&self, kind: SectionKind) -> Vec<String> {
        self.regions
            .iter()
            .flat_map(|r| r.blocks.iter())
            .filter(|b| b.kind == BlockKind::Section(kind))
            .flat_map(|b| b.paragraphs.iter().cloned())
            .collect()
    }

    pub fn to_html(&self) -> Result<String, askama::Error> {
        PreviewHtml {
            doc: self,
            stylesheet: self.variant.stylesheet(),
        }
        .render()
    }
}

/// Builds the on-screen preview of `payload` in the chosen layout.
pub fn render_preview(payload: &ResumePayload, variant: TemplateVariant) -> DisplayDocument {
    arrange(&render_resume(payload, Target::Screen), variant)
}

pub fn arrange(resume: &RenderedResume, variant: TemplateVariant) -> DisplayDocument {
    let name = Block {
        kind: BlockKind::Name,
        heading: String::new(),
        paragraphs: vec![resume.name.clone()],
    };
    let mut contact_lines: Vec<String> = Vec::new();
    if !resume.contact.is_empty() {
        contact_lines.push(resume.contact.clone());
    }
    contact_lines.extend(resume.dob.clone());

    let section_block = |kind: SectionKind, lines: &[String]| Block {
        kind: BlockKind::Section(kind),
        heading: kind.title().to_string(),
        paragraphs: lines.to_vec(),
    };

    let regions = match variant {
        TemplateVariant::Classic => {
            let header = Region {
                role: RegionRole::Header,
                blocks: vec![
                    name,
                    Block {
                        kind: BlockKind::Contact,
                        heading: String::new(),
                        paragraphs: contact_lines,
                    },
                ],
            };
            let main = Region {
                role: RegionRole::Main,
                blocks: resume
                    .sections
                    .iter()
                    .map(|s| section_block(s.kind, &s.lines))
                    .collect(),
            };
            vec![header, main]
        }
        TemplateVariant::Modern => {
            let in_sidebar = |k: SectionKind| matches!(k, SectionKind::Address | SectionKind::Skills);
            let mut sidebar = vec![Block {
                kind: BlockKind::Contact,
                heading: "Contact".to_string(),
                paragraphs: contact_lines,
            }];
            sidebar.extend(
                resume
                    .sections
                    .iter()
                    .filter(|s| in_sidebar(s.kind))
                    .map(|s| section_block(s.kind, &s.lines)),
            );
            let mut main = vec![name];
            main.extend(
                resume
                    .sections
                    .iter()
                    .filter(|s| !in_sidebar(s.kind))
                    .map(|s| section_block(s.kind, &s.lines)),
            );
            vec![
                Region {
                    role: RegionRole::Sidebar,
                    blocks: sidebar,
                },
                Region {
                    role: RegionRole::Main,
                    blocks: main,
                },
            ]
        }
        TemplateVariant::Compact => {
            let mut blocks = vec![
                name,
                Block {
                    kind: BlockKind::Contact,
                    heading: String::new(),
                    paragraphs: contact_lines,
                },
            ];
            for s in &resume.sections {
                let mut block = section_block(s.kind, &s.lines);
                match s.kind {
                    // Address sits directly under the contact line, untitled.
                    SectionKind::Address => block.heading.clear(),
                    SectionKind::Skills => block.paragraphs = vec![s.lines.join(", ")],
                    _ => {}
                }
                blocks.push(block);
            }
            vec![Region {
                role: RegionRole::Main,
                blocks,
            }]
        }
    };

    DisplayDocument { variant, regions }
}

// ────────────────────────────────────────────────────────────────────────────
// HTML
// ────────────────────────────────────────────────────────────────────────────

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{{ doc.variant.id() }}</title>
<style>{{ stylesheet|safe }}</style>
</head>
<body class="{{ doc.variant.id() }}">
<div class="resume">
{% for region in doc.regions %}
<{{ region.tag() }} class="region">
{% for block in region.blocks %}
<section class="block">
{% if !block.heading.is_empty() %}<h2>{{ block.heading }}</h2>{% endif %}
{% for p in block.paragraphs %}<p>{{ p }}</p>
{% endfor %}
</section>
{% endfor %}
</{{ region.tag() }}>
{% endfor %}
</div>
</body>
</html>"#,
    ext = "html"
)]
struct PreviewHtml<'a> {
    doc: &'a DisplayDocument,
    stylesheet: &'static str,
}

const CLASSIC_CSS: &str = "body{font-family:Georgia,serif;padding:24px}\
header{text-align:center}header .block:first-child p{font-size:1.9rem;font-weight:bold}\
h2{font-size:1.25rem;margin-top:1.5rem}";

const MODERN_CSS: &str = "body{font-family:Helvetica,Arial,sans-serif}\
.resume{display:grid;grid-template-columns:1fr 2fr;gap:24px}\
aside{background:#f3f4f6;padding:16px;border-radius:4px}main{padding:16px}\
main .block:first-child p{font-size:1.9rem;font-weight:bold}";

const COMPACT_CSS: &str = "body{font-family:Helvetica,Arial,sans-serif;font-size:.875rem;padding:16px}\
main .block:first-child p{font-size:1.125rem;font-weight:bold}h2{font-size:1rem;margin-top:1rem}\
p{margin:.15rem 0}";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payload::{Certification, Experience, Hobby, Skill};

    fn rich_payload() -> ResumePayload {
        let mut p = ResumePayload::default();
        p.personal.first_name = "Ann".into();
        p.personal.last_name = "Lee".into();
        p.personal.email = "ann@x.com".into();
        p.personal.phone = "1234567".into();
        p.address.line1 = "1 Main St".into();
        for (name, months) in [("Go", "6"), ("Rust", "")] {
            p.skills.push(Skill {
                name: name.into(),
                months: months.into(),
                ..Default::default()
            });
        }
        p.experiences.push(Experience {
            company_name: "Acme".into(),
            role: "Engineer".into(),
            current: true,
            ..Default::default()
        });
        p.certifications.push(Certification {
            name: "CKA".into(),
            ..Default::default()
        });
        p.hobbies.push(Hobby {
            hobby: "Chess".into(),
            ..Default::default()
        });
        p.consent_text = "I agree <b>".into();
        p
    }

    #[test]
    fn test_variant_ids_round_trip() {
        for v in TemplateVariant::ALL {
            assert_eq!(v.id().parse::<TemplateVariant>().unwrap(), v);
        }
        assert!("template-fancy".parse::<TemplateVariant>().is_err());
    }

    #[test]
    fn test_all_variants_select_same_sections() {
        let payloads = [ResumePayload::default(), rich_payload()];
        for p in &payloads {
            let expected = render_preview(p, TemplateVariant::Classic).section_kinds();
            for v in TemplateVariant::ALL {
                assert_eq!(render_preview(p, v).section_kinds(), expected, "variant {v}");
            }
        }
    }

    #[test]
    fn test_modern_puts_skills_in_sidebar() {
        let doc = render_preview(&rich_payload(), TemplateVariant::Modern);
        let sidebar = &doc.regions[0];
        assert_eq!(sidebar.role, RegionRole::Sidebar);
        assert!(sidebar
            .blocks
            .iter()
            .any(|b| b.kind == BlockKind::Section(SectionKind::Skills)));
    }

    #[test]
    fn test_compact_collapses_skills() {
        let doc = render_preview(&rich_payload(), TemplateVariant::Compact);
        assert_eq!(
            doc.section_text(SectionKind::Skills),
            vec!["Go (6 months), Rust"]
        );
        let classic = render_preview(&rich_payload(), TemplateVariant::Classic);
        assert_eq!(
            classic.section_text(SectionKind::Skills),
            vec!["Go (6 months)", "Rust"]
        );
    }

    #[test]
    fn test_html_escapes_user_text() {
        let html = render_preview(&rich_payload(), TemplateVariant::Classic)
            .to_html()
            .unwrap();
        assert!(html.contains("Ann Lee"));
        assert!(html.contains("<header"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_modern_html_has_sidebar() {
        let html = render_preview(&rich_payload(), TemplateVariant::Modern)
            .to_html()
            .unwrap();
        assert!(html.contains("<aside"));
        assert!(html.contains("template-modern"));
    }
}
