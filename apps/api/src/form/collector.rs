//! Immutable form state and its reducer.
//!
//! `FormState::apply` never mutates the receiver: each edit yields a new state,
//! or an error that leaves the old state usable. `submit` validates, encodes
//! attachments, and hands off the finished payload.

use thiserror::Error;
use tracing::debug;

use crate::form::attachments::{self, Attachment};
use crate::form::gating::TierGate;
use crate::form::validation::{validate, FieldErrors};
use crate::models::payload::{
    Certification, EducationEntry, EntryId, Experience, Hobby, Internship, ListEntry,
    ResumePayload, Skill, Tier,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FirstName,
    LastName,
    Phone,
    Email,
    AltPhone,
    AltEmail,
    Dob,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Line1,
    Line2,
    District,
    Mandal,
    State,
    Pincode,
}

/// Add assigns a fresh id; update keeps the addressed entry's id.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEdit<T> {
    Add(T),
    Update(EntryId, T),
    Remove(EntryId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    Personal(PersonalField, String),
    Address(AddressField, String),
    ConsentText(String),
    Photo(Option<Attachment>),
    Signature(Option<Attachment>),
    Education(Tier, ListEdit<EducationEntry>),
    Skills(ListEdit<Skill>),
    Hobbies(ListEdit<Hobby>),
    Internships(ListEdit<Internship>),
    Certifications(ListEdit<Certification>),
    Experiences(ListEdit<Experience>),
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("{} is closed while an earlier stage is in progress", .0.path())]
    TierBlocked(Tier),

    #[error("No entry with id {0}")]
    UnknownEntry(EntryId),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    #[error("Attachment encoding failed: {0}")]
    Encoding(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    payload: ResumePayload,
    photo: Option<Attachment>,
    signature: Option<Attachment>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes editing a previously saved payload. Entry ids are kept as sent.
    pub fn from_payload(payload: ResumePayload) -> Self {
        FormState {
            payload,
            ..Self::default()
        }
    }

    /// The payload as edited so far, without encoded attachments.
    pub fn payload(&self) -> &ResumePayload {
        &self.payload
    }

    pub fn tier_gate(&self) -> TierGate {
        TierGate::from_education(&self.payload.education)
    }

    pub fn apply(&self, edit: FormEdit) -> Result<FormState, FormError> {
        let mut next = self.clone();
        match edit {
            FormEdit::Personal(field, value) => {
                let p = &mut next.payload.personal;
                let slot = match field {
                    PersonalField::FirstName => &mut p.first_name,
                    PersonalField::LastName => &mut p.last_name,
                    PersonalField::Phone => &mut p.phone,
                    PersonalField::Email => &mut p.email,
                    PersonalField::AltPhone => &mut p.alt_phone,
                    PersonalField::AltEmail => &mut p.alt_email,
                    PersonalField::Dob => &mut p.dob,
                };
                *slot = value;
            }
            FormEdit::Address(field, value) => {
                let a = &mut next.payload.address;
                let slot = match field {
                    AddressField::Line1 => &mut a.line1,
                    AddressField::Line2 => &mut a.line2,
                    AddressField::District => &mut a.district,
                    AddressField::Mandal => &mut a.mandal,
                    AddressField::State => &mut a.state,
                    AddressField::Pincode => &mut a.pincode,
                };
                *slot = value;
            }
            FormEdit::ConsentText(text) => next.payload.consent_text = text,
            FormEdit::Photo(a) => next.photo = a,
            FormEdit::Signature(a) => next.signature = a,
            FormEdit::Education(tier, edit) => {
                if !matches!(edit, ListEdit::Remove(_)) && self.tier_gate().is_blocked(tier) {
                    return Err(FormError::TierBlocked(tier));
                }
                apply_list(next.payload.education.tier_mut(tier), edit)?;
            }
            FormEdit::Skills(edit) => apply_list(&mut next.payload.skills, edit)?,
            FormEdit::Hobbies(edit) => apply_list(&mut next.payload.hobbies, edit)?,
            FormEdit::Internships(edit) => apply_list(&mut next.payload.internships, edit)?,
            FormEdit::Certifications(edit) => apply_list(&mut next.payload.certifications, edit)?,
            FormEdit::Experiences(edit) => apply_list(&mut next.payload.experiences, edit)?,
        }
        Ok(next)
    }

    /// Validates the form and, if it passes, encodes both attachments
    /// concurrently before assembling the final payload.
    pub async fn submit(self) -> Result<ResumePayload, SubmitError> {
        let errors = validate(&self.payload);
        if !errors.is_empty() {
            debug!("Form submission blocked: {} invalid field(s)", errors.len());
            return Err(SubmitError::Invalid(errors));
        }

        let (photo, signature) =
            tokio::join!(attachments::encode(self.photo), attachments::encode(self.signature));

        let mut payload = self.payload;
        payload.personal.photo = photo?;
        payload.signature = signature?;
        Ok(payload)
    }
}

fn apply_list<T: ListEntry>(list: &mut Vec<T>, edit: ListEdit<T>) -> Result<(), FormError> {
    match edit {
        ListEdit::Add(mut entry) => {
            entry.set_id(EntryId::generate());
            list.push(entry);
        }
        ListEdit::Update(id, mut entry) => {
            let slot = list
                .iter_mut()
                .find(|e| *e.id() == id)
                .ok_or_else(|| FormError::UnknownEntry(id.clone()))?;
            entry.set_id(id);
            *slot = entry;
        }
        ListEdit::Remove(id) => {
            let before = list.len();
            list.retain(|e| *e.id() != id);
            if list.len() == before {
                return Err(FormError::UnknownEntry(id));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let edits = [
            FormEdit::Personal(PersonalField::FirstName, "Ann".into()),
            FormEdit::Personal(PersonalField::LastName, "Lee".into()),
            FormEdit::Personal(PersonalField::Email, "ann@x.com".into()),
            FormEdit::Personal(PersonalField::Phone, "1234567".into()),
            FormEdit::Address(AddressField::Line1, "1 Main St".into()),
        ];
        edits
            .into_iter()
            .fold(FormState::new(), |s, e| s.apply(e).unwrap())
    }

    fn school(current: bool) -> EducationEntry {
        EducationEntry {
            institution_name: "ZPHS".into(),
            current,
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_returns_new_state_and_keeps_old() {
        let before = FormState::new();
        let after = before
            .apply(FormEdit::Personal(PersonalField::FirstName, "Ann".into()))
            .unwrap();
        assert_eq!(before.payload().personal.first_name, "");
        assert_eq!(after.payload().personal.first_name, "Ann");
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let s = FormState::new()
            .apply(FormEdit::Skills(ListEdit::Add(Skill::default())))
            .unwrap()
            .apply(FormEdit::Skills(ListEdit::Add(Skill::default())))
            .unwrap();
        let skills = &s.payload().skills;
        assert_eq!(skills.len(), 2);
        assert_ne!(skills[0].id, skills[1].id);
        assert!(!skills[0].id.is_empty());
    }

    #[test]
    fn test_update_keeps_id_and_order() {
        let s = FormState::new()
            .apply(FormEdit::Hobbies(ListEdit::Add(Hobby::default())))
            .unwrap()
            .apply(FormEdit::Hobbies(ListEdit::Add(Hobby::default())))
            .unwrap();
        let id = s.payload().hobbies[1].id.clone();
        let s = s
            .apply(FormEdit::Hobbies(ListEdit::Update(
                id.clone(),
                Hobby {
                    id: EntryId::default(),
                    hobby: "Chess".into(),
                },
            )))
            .unwrap();
        assert_eq!(s.payload().hobbies[1].id, id);
        assert_eq!(s.payload().hobbies[1].hobby, "Chess");
        assert_eq!(s.payload().hobbies[0].hobby, "");
    }

    #[test]
    fn test_update_addresses_client_minted_id() {
        let payload: ResumePayload = serde_json::from_value(serde_json::json!({
            "skills": [{ "id": "s1", "name": "Go", "months": 6 }]
        }))
        .unwrap();
        let s = FormState::from_payload(payload)
            .apply(FormEdit::Skills(ListEdit::Update(
                EntryId::from("s1"),
                Skill {
                    name: "Rust".into(),
                    ..Default::default()
                },
            )))
            .unwrap();
        assert_eq!(s.payload().skills[0].id.as_str(), "s1");
        assert_eq!(s.payload().skills[0].name, "Rust");
    }

    #[test]
    fn test_remove_unknown_id_rejected() {
        let id = EntryId::from("x1");
        let err = FormState::new()
            .apply(FormEdit::Experiences(ListEdit::Remove(id.clone())))
            .unwrap_err();
        assert_eq!(err, FormError::UnknownEntry(id));
    }

    #[test]
    fn test_current_school_blocks_adding_later_tiers() {
        let s = FormState::new()
            .apply(FormEdit::Education(Tier::School, ListEdit::Add(school(true))))
            .unwrap();
        for tier in [Tier::Intermediate, Tier::Ug, Tier::Pg] {
            let err = s
                .apply(FormEdit::Education(tier, ListEdit::Add(EducationEntry::default())))
                .unwrap_err();
            assert_eq!(err, FormError::TierBlocked(tier));
        }
    }

    #[test]
    fn test_completed_school_allows_intermediate() {
        let s = FormState::new()
            .apply(FormEdit::Education(Tier::School, ListEdit::Add(school(false))))
            .unwrap()
            .apply(FormEdit::Education(
                Tier::Intermediate,
                ListEdit::Add(EducationEntry::default()),
            ))
            .unwrap();
        assert_eq!(s.payload().education.intermediate.len(), 1);
    }

    #[test]
    fn test_remove_allowed_in_blocked_tier() {
        let s = FormState::new()
            .apply(FormEdit::Education(Tier::School, ListEdit::Add(school(false))))
            .unwrap()
            .apply(FormEdit::Education(Tier::Ug, ListEdit::Add(EducationEntry::default())))
            .unwrap();
        let school_id = s.payload().education.school[0].id.clone();
        let ug_id = s.payload().education.ug[0].id.clone();
        let s = s
            .apply(FormEdit::Education(
                Tier::School,
                ListEdit::Update(school_id, school(true)),
            ))
            .unwrap();
        assert!(s.tier_gate().ug);
        let s = s
            .apply(FormEdit::Education(Tier::Ug, ListEdit::Remove(ug_id)))
            .unwrap();
        assert!(s.payload().education.ug.is_empty());
    }

    #[tokio::test]
    async fn test_submit_missing_line1_blocked() {
        let s = filled()
            .apply(FormEdit::Address(AddressField::Line1, String::new()))
            .unwrap();
        match s.submit().await {
            Err(SubmitError::Invalid(errors)) => {
                assert!(!errors.get("address.line1").unwrap_or_default().is_empty());
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_encodes_attachments() {
        let s = filled()
            .apply(FormEdit::Photo(Some(Attachment::new("image/png", b"png".to_vec()))))
            .unwrap()
            .apply(FormEdit::Signature(Some(Attachment::new("image/png", b"sig".to_vec()))))
            .unwrap();
        let payload = s.submit().await.unwrap();
        assert_eq!(payload.personal.photo.as_deref(), Some("data:image/png;base64,cG5n"));
        assert_eq!(payload.signature.as_deref(), Some("data:image/png;base64,c2ln"));
        assert_eq!(payload.personal.first_name, "Ann");
    }

    #[tokio::test]
    async fn test_submit_without_attachments() {
        let payload = filled().submit().await.unwrap();
        assert_eq!(payload.personal.photo, None);
        assert_eq!(payload.signature, None);
    }
}
