//! Field selection and line formatting shared by every output target.
//!
//! The preview templates, the PDF writer, and the DOCX writer all consume the
//! `RenderedResume` produced here, so the choice of which fields appear and how
//! each line reads lives in exactly one place.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::payload::{
    Certification, EducationEntry, Experience, Internship, ResumePayload, Skill,
};

/// The only formatting difference between screen and document output is the
/// unit printed after a skill's months of experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// `Go (6 months)`
    Screen,
    /// `Go (6m)`
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Address,
    Education,
    Skills,
    Experience,
    Internships,
    Certifications,
    Hobbies,
    Consent,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Address => "Address",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Experience => "Experience",
            SectionKind::Internships => "Internships",
            SectionKind::Certifications => "Certifications",
            SectionKind::Hobbies => "Hobbies",
            SectionKind::Consent => "Consent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResume {
    pub name: String,
    pub contact: String,
    /// `DOB: …` line, when a date of birth was given.
    pub dob: Option<String>,
    /// Non-empty sections only, in display order.
    pub sections: Vec<RenderedSection>,
}

impl RenderedResume {
    pub fn section(&self, kind: SectionKind) -> Option<&RenderedSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn section_kinds(&self) -> BTreeSet<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }

    /// Every printed line in reading order, section titles included. Used by
    /// the exporters and as the reference for extracted-text comparisons.
    pub fn text_lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        out.extend(non_empty(&self.name));
        out.extend(non_empty(&self.contact));
        out.extend(self.dob.clone());
        for section in &self.sections {
            out.push(section.kind.title().to_string());
            out.extend(section.lines.iter().cloned());
        }
        out
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Joins the trimmed, non-empty parts with `sep`.
fn join_non_empty<'a>(parts: impl IntoIterator<Item = &'a str>, sep: &str) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Appends `part` separated by a single space.
fn push_part(line: &mut String, part: &str) {
    let part = part.trim();
    if part.is_empty() {
        return;
    }
    if !line.is_empty() {
        line.push(' ');
    }
    line.push_str(part);
}

pub fn render_resume(payload: &ResumePayload, target: Target) -> RenderedResume {
    let p = &payload.personal;
    let a = &payload.address;

    let mut sections = Vec::new();
    let mut push = |kind: SectionKind, lines: Vec<String>| {
        if !lines.is_empty() {
            sections.push(RenderedSection { kind, lines });
        }
    };

    let address = join_non_empty(
        [
            a.line1.as_str(),
            a.line2.as_str(),
            a.mandal.as_str(),
            a.district.as_str(),
            a.state.as_str(),
            a.pincode.as_str(),
        ],
        ", ",
    );
    push(SectionKind::Address, non_empty(&address).into_iter().collect());

    push(
        SectionKind::Education,
        payload.education.entries().filter_map(education_line).collect(),
    );
    push(
        SectionKind::Skills,
        payload
            .skills
            .iter()
            .filter_map(|s| skill_line(s, target))
            .collect(),
    );
    push(
        SectionKind::Experience,
        payload.experiences.iter().filter_map(experience_line).collect(),
    );
    push(
        SectionKind::Internships,
        payload.internships.iter().filter_map(internship_line).collect(),
    );
    push(
        SectionKind::Certifications,
        payload
            .certifications
            .iter()
            .filter_map(certification_line)
            .collect(),
    );

    let hobbies = join_non_empty(payload.hobbies.iter().map(|h| h.hobby.as_str()), ", ");
    push(SectionKind::Hobbies, non_empty(&hobbies).into_iter().collect());

    if !payload.consent_text.trim().is_empty() {
        push(
            SectionKind::Consent,
            payload.consent_text.lines().map(str::to_string).collect(),
        );
    }

    let dob = p.dob.trim();
    RenderedResume {
        name: join_non_empty([p.first_name.as_str(), p.last_name.as_str()], " "),
        contact: join_non_empty([p.email.as_str(), p.phone.as_str()], " | "),
        dob: (!dob.is_empty()).then(|| format!("DOB: {dob}")),
        sections,
    }
}

fn education_line(e: &EducationEntry) -> Option<String> {
    let mut line = join_non_empty([e.display_name(), e.display_stream()], " — ");
    if !e.pass_out.trim().is_empty() {
        push_part(&mut line, &format!("(Pass-out: {})", e.pass_out.trim()));
    }
    if !e.marks.trim().is_empty() {
        push_part(&mut line, &format!("(Marks: {})", e.marks.trim()));
    }
    non_empty(&line)
}

fn skill_line(s: &Skill, target: Target) -> Option<String> {
    let name = s.name.trim();
    if name.is_empty() {
        return None;
    }
    let months = s.months.trim();
    Some(match (months.is_empty(), target) {
        (true, _) => name.to_string(),
        (false, Target::Screen) => format!("{name} ({months} months)"),
        (false, Target::Document) => format!("{name} ({months}m)"),
    })
}

fn experience_line(x: &Experience) -> Option<String> {
    let mut line = join_non_empty([x.company_name.as_str(), x.role.as_str()], " — ");
    push_part(&mut line, &x.start_date);
    if x.current {
        push_part(&mut line, "(Present)");
    } else if !x.end_date.trim().is_empty() {
        push_part(&mut line, &format!("– {}", x.end_date.trim()));
    }
    if line.is_empty() {
        return None;
    }
    if !x.notes.trim().is_empty() {
        line.push_str(" | Notes: ");
        line.push_str(x.notes.trim());
    }
    Some(line)
}

fn internship_line(i: &Internship) -> Option<String> {
    let mut line = join_non_empty([i.name.as_str(), i.place.as_str()], " — ");
    push_part(&mut line, &i.start_date);
    push_part(&mut line, &i.end_date);
    non_empty(&line)
}

fn certification_line(c: &Certification) -> Option<String> {
    let mut line = c.name.trim().to_string();
    if !c.issue_date.trim().is_empty() {
        push_part(&mut line, &format!("(Issued: {})", c.issue_date.trim()));
    }
    if !c.expiry_date.trim().is_empty() {
        push_part(&mut line, &format!("(Expires: {})", c.expiry_date.trim()));
    }
    non_empty(&line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payload::{Hobby, Tier};

    fn ann() -> ResumePayload {
        let mut p = ResumePayload::default();
        p.personal.first_name = "Ann".into();
        p.personal.last_name = "Lee".into();
        p.personal.email = "ann@x.com".into();
        p.personal.phone = "1234567".into();
        p.address.line1 = "1 Main St".into();
        p.skills.push(Skill {
            name: "Go".into(),
            months: "6".into(),
            ..Default::default()
        });
        p
    }

    #[test]
    fn test_header_lines() {
        let r = render_resume(&ann(), Target::Screen);
        assert_eq!(r.name, "Ann Lee");
        assert_eq!(r.contact, "ann@x.com | 1234567");
        assert_eq!(r.dob, None);
    }

    #[test]
    fn test_contact_omits_missing_phone() {
        let mut p = ann();
        p.personal.phone.clear();
        assert_eq!(render_resume(&p, Target::Screen).contact, "ann@x.com");
    }

    #[test]
    fn test_dob_line() {
        let mut p = ann();
        p.personal.dob = "2000-01-31".into();
        assert_eq!(
            render_resume(&p, Target::Screen).dob.as_deref(),
            Some("DOB: 2000-01-31")
        );
    }

    #[test]
    fn test_address_order_skips_empties() {
        let mut p = ann();
        p.address.line2 = "Apt 4".into();
        p.address.district = "Guntur".into();
        p.address.state = "Andhra Pradesh".into();
        p.address.pincode = "522001".into();
        let r = render_resume(&p, Target::Screen);
        assert_eq!(
            r.section(SectionKind::Address).unwrap().lines,
            vec!["1 Main St, Apt 4, Guntur, Andhra Pradesh, 522001"]
        );
    }

    #[test]
    fn test_skill_units_by_target() {
        let p = ann();
        assert_eq!(
            render_resume(&p, Target::Screen).section(SectionKind::Skills).unwrap().lines,
            vec!["Go (6 months)"]
        );
        assert_eq!(
            render_resume(&p, Target::Document).section(SectionKind::Skills).unwrap().lines,
            vec!["Go (6m)"]
        );
    }

    #[test]
    fn test_skill_without_months() {
        let mut p = ann();
        p.skills[0].months.clear();
        assert_eq!(
            render_resume(&p, Target::Document).section(SectionKind::Skills).unwrap().lines,
            vec!["Go"]
        );
    }

    #[test]
    fn test_education_line_with_other_override() {
        let mut p = ann();
        p.education.tier_mut(Tier::Intermediate).push(EducationEntry {
            institution_name: "Other Intermediate Colleges".into(),
            other_institution_name: "Sri Chaitanya".into(),
            stream: "MPC".into(),
            pass_out: "2018-04".into(),
            marks: "92%".into(),
            ..Default::default()
        });
        p.education.tier_mut(Tier::School).push(EducationEntry {
            institution_name: "ZPHS".into(),
            ..Default::default()
        });
        let r = render_resume(&p, Target::Screen);
        assert_eq!(
            r.section(SectionKind::Education).unwrap().lines,
            vec![
                "ZPHS",
                "Sri Chaitanya — MPC (Pass-out: 2018-04) (Marks: 92%)"
            ]
        );
    }

    #[test]
    fn test_experience_current_and_past() {
        let mut p = ann();
        p.experiences.push(Experience {
            company_name: "Acme".into(),
            role: "Engineer".into(),
            start_date: "2020-01-01".into(),
            end_date: "2021-01-01".into(),
            current: true,
            notes: "Backend".into(),
            ..Default::default()
        });
        p.experiences.push(Experience {
            company_name: "Initech".into(),
            role: "Intern".into(),
            start_date: "2019-01-01".into(),
            end_date: "2019-06-01".into(),
            ..Default::default()
        });
        let r = render_resume(&p, Target::Screen);
        assert_eq!(
            r.section(SectionKind::Experience).unwrap().lines,
            vec![
                "Acme — Engineer 2020-01-01 (Present) | Notes: Backend",
                "Initech — Intern 2019-01-01 – 2019-06-01",
            ]
        );
    }

    #[test]
    fn test_internship_and_certification_lines() {
        let mut p = ann();
        p.internships.push(Internship {
            name: "Summer Intern".into(),
            place: "Hyderabad".into(),
            start_date: "2019-05-01".into(),
            end_date: "2019-07-01".into(),
            ..Default::default()
        });
        p.certifications.push(Certification {
            name: "AWS SAA".into(),
            issue_date: "2022-01-01".into(),
            ..Default::default()
        });
        let r = render_resume(&p, Target::Screen);
        assert_eq!(
            r.section(SectionKind::Internships).unwrap().lines,
            vec!["Summer Intern — Hyderabad 2019-05-01 2019-07-01"]
        );
        assert_eq!(
            r.section(SectionKind::Certifications).unwrap().lines,
            vec!["AWS SAA (Issued: 2022-01-01)"]
        );
    }

    #[test]
    fn test_hobbies_comma_joined() {
        let mut p = ann();
        for h in ["Chess", " ", "Running"] {
            p.hobbies.push(Hobby {
                hobby: h.into(),
                ..Default::default()
            });
        }
        let r = render_resume(&p, Target::Screen);
        assert_eq!(r.section(SectionKind::Hobbies).unwrap().lines, vec!["Chess, Running"]);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let r = render_resume(&ann(), Target::Screen);
        let kinds: Vec<SectionKind> = r.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SectionKind::Address, SectionKind::Skills]);
    }

    #[test]
    fn test_consent_verbatim_only_when_present() {
        let mut p = ann();
        p.consent_text = "   ".into();
        assert!(render_resume(&p, Target::Screen).section(SectionKind::Consent).is_none());
        p.consent_text = "I hereby declare\nthe above is true.".into();
        assert_eq!(
            render_resume(&p, Target::Screen).section(SectionKind::Consent).unwrap().lines,
            vec!["I hereby declare", "the above is true."]
        );
    }

    #[test]
    fn test_entry_ids_never_rendered() {
        let mut p = ann();
        p.skills[0].id = crate::models::payload::EntryId::from("skill-7f3a");
        let text = render_resume(&p, Target::Document).text_lines().join("\n");
        assert!(!text.contains(p.skills[0].id.as_str()));
    }

    #[test]
    fn test_text_lines_order() {
        let lines = render_resume(&ann(), Target::Document).text_lines();
        assert_eq!(
            lines,
            vec!["Ann Lee", "ann@x.com | 1234567", "Address", "1 Main St", "Skills", "Go (6m)"]
        );
    }
}
