//! Canonical resume payload shared by the form collector, preview templates,
//! document exporter, store, and suggestion proxy.
//!
//! Every field is optional on the wire and defaults to empty, matching what the
//! browser form sends for untouched inputs.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumePayload {
    pub personal: Personal,
    pub address: Address,
    pub education: Education,
    pub skills: Vec<Skill>,
    pub hobbies: Vec<Hobby>,
    pub internships: Vec<Internship>,
    pub certifications: Vec<Certification>,
    pub experiences: Vec<Experience>,
    pub consent_text: String,
    /// Signature image as a data URI.
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Personal {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub alt_phone: String,
    pub alt_email: String,
    pub dob: String,
    /// Passport photo as a data URI.
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub district: String,
    pub mandal: String,
    pub state: String,
    #[serde(deserialize_with = "string_or_number")]
    pub pincode: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire helpers
// ────────────────────────────────────────────────────────────────────────────

/// Opaque list-entry identifier. Clients mint their own (UUIDs, timestamps,
/// short tags), so any string or number is accepted and kept as text; it never
/// reaches rendered output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        string_or_number(deserializer).map(EntryId)
    }
}

impl EntryId {
    /// A fresh v4 UUID, used when the collector adds an entry.
    pub fn generate() -> Self {
        EntryId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepts a JSON string, number, or null for a textual field. Form inputs
/// arrive as strings, but scripted clients send `"months": 6`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// The four education stages, in progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    School,
    Intermediate,
    Ug,
    Pg,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::School, Tier::Intermediate, Tier::Ug, Tier::Pg];

    /// Field path used for per-field error reporting.
    pub fn path(self) -> &'static str {
        match self {
            Tier::School => "education.school",
            Tier::Intermediate => "education.intermediate",
            Tier::Ug => "education.ug",
            Tier::Pg => "education.pg",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub school: Vec<EducationEntry>,
    pub intermediate: Vec<EducationEntry>,
    pub ug: Vec<EducationEntry>,
    pub pg: Vec<EducationEntry>,
}

impl Education {
    pub fn tier(&self, tier: Tier) -> &[EducationEntry] {
        match tier {
            Tier::School => &self.school,
            Tier::Intermediate => &self.intermediate,
            Tier::Ug => &self.ug,
            Tier::Pg => &self.pg,
        }
    }

    pub fn tier_mut(&mut self, tier: Tier) -> &mut Vec<EducationEntry> {
        match tier {
            Tier::School => &mut self.school,
            Tier::Intermediate => &mut self.intermediate,
            Tier::Ug => &mut self.ug,
            Tier::Pg => &mut self.pg,
        }
    }

    /// All entries in tier order: school, intermediate, UG, PG.
    pub fn entries(&self) -> impl Iterator<Item = &EducationEntry> {
        Tier::ALL.into_iter().flat_map(move |t| self.tier(t).iter())
    }

    pub fn is_empty(&self) -> bool {
        Tier::ALL.iter().all(|t| self.tier(*t).is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: EntryId,
    #[serde(alias = "schoolName", alias = "collegeName")]
    pub institution_name: String,
    #[serde(alias = "otherSchoolName", alias = "otherCollegeName")]
    pub other_institution_name: String,
    pub board: String,
    pub other_board: String,
    pub university: String,
    pub other_university: String,
    pub stream: String,
    pub other_stream: String,
    pub specialization: String,
    pub other_specialization: String,
    pub address: String,
    #[serde(deserialize_with = "string_or_number")]
    pub marks: String,
    #[serde(deserialize_with = "string_or_number")]
    pub pass_out: String,
    pub current: bool,
}

impl EducationEntry {
    pub fn display_name(&self) -> &str {
        resolve_choice(&self.institution_name, &self.other_institution_name)
    }

    pub fn display_stream(&self) -> &str {
        resolve_choice(&self.stream, &self.other_stream)
    }

    pub fn display_board(&self) -> &str {
        resolve_choice(&self.board, &self.other_board)
    }

    pub fn display_university(&self) -> &str {
        resolve_choice(&self.university, &self.other_university)
    }

    pub fn display_specialization(&self) -> &str {
        resolve_choice(&self.specialization, &self.other_specialization)
    }
}

/// True for the "Other" catalogue sentinel, including labels such as
/// "Other Intermediate Colleges".
pub fn is_other_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("other")
        || value
            .get(..6)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("other "))
}

/// Picks the free-text override when the selected value is empty or the
/// "Other" sentinel; otherwise the selected value.
pub fn resolve_choice<'a>(value: &'a str, other: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() || is_other_sentinel(value) {
        other.trim()
    } else {
        value
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills, hobbies, tenure records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: EntryId,
    pub name: String,
    /// Months of experience as typed into the form (kept textual).
    #[serde(deserialize_with = "string_or_number")]
    pub months: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hobby {
    pub id: EntryId,
    pub hobby: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Internship {
    pub id: EntryId,
    pub name: String,
    pub place: String,
    pub start_date: String,
    pub end_date: String,
    pub certificate_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: EntryId,
    pub name: String,
    pub issue_date: String,
    pub expiry_date: String,
    pub certificate_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: EntryId,
    pub company_name: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub notes: String,
}

/// A list item addressable by its stable identifier.
pub trait ListEntry: Clone {
    fn id(&self) -> &EntryId;
    fn set_id(&mut self, id: EntryId);
}

macro_rules! impl_list_entry {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ListEntry for $ty {
                fn id(&self) -> &EntryId {
                    &self.id
                }

                fn set_id(&mut self, id: EntryId) {
                    self.id = id;
                }
            }
        )*
    };
}

impl_list_entry!(EducationEntry, Skill, Hobby, Internship, Certification, Experience);
