use serde::Serialize;

use crate::models::payload::{Education, Tier};

/// Which education stages are closed because an earlier stage is still in
/// progress. A stage is blocked when any entry of any earlier stage is current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierGate {
    pub intermediate: bool,
    pub ug: bool,
    pub pg: bool,
}

impl TierGate {
    pub fn from_education(education: &Education) -> Self {
        let school = education.school.iter().any(|e| e.current);
        let intermediate = education.intermediate.iter().any(|e| e.current);
        let ug = education.ug.iter().any(|e| e.current);

        Self {
            intermediate: school,
            ug: school || intermediate,
            pg: school || intermediate || ug,
        }
    }

    pub fn is_blocked(&self, tier: Tier) -> bool {
        match tier {
            Tier::School => false,
            Tier::Intermediate => self.intermediate,
            Tier::Ug => self.ug,
            Tier::Pg => self.pg,
        }
    }
}
