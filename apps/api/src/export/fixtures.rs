//! Shared export fixtures: a payload that fills every section the writers
//! print, including current and past tenures.

use crate::models::payload::{
    Certification, EducationEntry, Experience, Hobby, Internship, ResumePayload, Skill, Tier,
};
use crate::render::{render_resume, RenderedResume, Target};

pub fn rich_payload() -> ResumePayload {
    let mut p = ResumePayload::default();
    p.personal.first_name = "Ravi".into();
    p.personal.last_name = "Kumar".into();
    p.personal.email = "ravi@x.com".into();
    p.personal.phone = "9876543210".into();
    p.personal.dob = "2000-02-29".into();
    p.address.line1 = "4-12 Gandhi Road".into();
    p.address.district = "Guntur".into();
    p.address.pincode = "522001".into();
    p.education.tier_mut(Tier::School).push(EducationEntry {
        institution_name: "ZPHS".into(),
        pass_out: "2016".into(),
        ..Default::default()
    });
    p.education.tier_mut(Tier::Ug).push(EducationEntry {
        institution_name: "Other".into(),
        other_institution_name: "RVR College".into(),
        stream: "B.Tech".into(),
        marks: "8.1".into(),
        ..Default::default()
    });
    p.skills.push(Skill {
        name: "Go".into(),
        months: "6".into(),
        ..Default::default()
    });
    p.experiences.push(Experience {
        company_name: "Acme".into(),
        role: "Engineer".into(),
        start_date: "2022-01-01".into(),
        current: true,
        ..Default::default()
    });
    p.experiences.push(Experience {
        company_name: "Initech".into(),
        role: "Analyst".into(),
        start_date: "2021-01-01".into(),
        end_date: "2021-12-01".into(),
        ..Default::default()
    });
    p.internships.push(Internship {
        name: "Summer Intern".into(),
        place: "Vijayawada".into(),
        start_date: "2020-05-01".into(),
        end_date: "2020-07-01".into(),
        ..Default::default()
    });
    p.certifications.push(Certification {
        name: "CKA".into(),
        issue_date: "2023-03-01".into(),
        ..Default::default()
    });
    p.hobbies.push(Hobby {
        hobby: "Chess".into(),
        ..Default::default()
    });
    p.consent_text = "I hereby declare\nthe above is true.".into();
    p
}

pub fn rich_resume() -> RenderedResume {
    render_resume(&rich_payload(), Target::Document)
}
