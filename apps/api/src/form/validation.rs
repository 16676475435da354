//! Field validators run on submission. Failures are reported per field path
//! (e.g. `personal.email`) and never abort the flow.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::form::gating::TierGate;
use crate::models::payload::{ResumePayload, Tier};
use crate::models::states::is_known_state;

pub const REQUIRED_MSG: &str = "This field is required.";
pub const INVALID_EMAIL_MSG: &str = "Enter a valid email.";
pub const INVALID_PHONE_MSG: &str = "Enter a valid phone number.";
pub const SAME_EMAIL_MSG: &str = "Alternate email cannot be the same as primary email.";
pub const SAME_PHONE_MSG: &str = "Alternate phone cannot be the same as primary phone.";
pub const INVALID_STATE_MSG: &str = "Select a valid state.";

/// Field path → message. Ordered so responses are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `path` unless one is already present; the first
    /// failing rule for a field wins.
    pub fn add(&mut self, path: &str, message: impl Into<String>) {
        self.0
            .entry(path.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9+\-() ]{7,15}$").expect("static phone pattern"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// 7–15 characters drawn from digits, `+`, `-`, parentheses, and space.
pub fn is_valid_phone(value: &str) -> bool {
    phone_regex().is_match(value)
}

fn check_required(errors: &mut FieldErrors, path: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.add(path, REQUIRED_MSG);
        false
    } else {
        true
    }
}

fn check_email(errors: &mut FieldErrors, path: &str, value: &str) {
    if !value.is_empty() && !is_valid_email(value) {
        errors.add(path, INVALID_EMAIL_MSG);
    }
}

fn check_phone(errors: &mut FieldErrors, path: &str, value: &str) {
    if !value.is_empty() && !is_valid_phone(value) {
        errors.add(path, INVALID_PHONE_MSG);
    }
}

/// Runs every submission rule against `payload`.
pub fn validate(payload: &ResumePayload) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let personal = &payload.personal;

    check_required(&mut errors, "personal.firstName", &personal.first_name);
    check_required(&mut errors, "personal.lastName", &personal.last_name);
    if check_required(&mut errors, "personal.phone", &personal.phone) {
        check_phone(&mut errors, "personal.phone", &personal.phone);
    }
    if check_required(&mut errors, "personal.email", &personal.email) {
        check_email(&mut errors, "personal.email", &personal.email);
    }
    check_required(&mut errors, "address.line1", &payload.address.line1);

    check_phone(&mut errors, "personal.altPhone", &personal.alt_phone);
    check_email(&mut errors, "personal.altEmail", &personal.alt_email);

    if !personal.email.is_empty() && personal.email == personal.alt_email {
        errors.add("personal.altEmail", SAME_EMAIL_MSG);
    }
    if !personal.phone.is_empty() && personal.phone == personal.alt_phone {
        errors.add("personal.altPhone", SAME_PHONE_MSG);
    }

    let state = payload.address.state.trim();
    if !state.is_empty() && !is_known_state(state) {
        errors.add("address.state", INVALID_STATE_MSG);
    }

    let gate = TierGate::from_education(&payload.education);
    for tier in Tier::ALL {
        if gate.is_blocked(tier) && !payload.education.tier(tier).is_empty() {
            errors.add(
                tier.path(),
                "Remove these entries or clear the current flag on an earlier stage.",
            );
        }
    }

    errors
}
