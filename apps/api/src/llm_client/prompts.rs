// Prompt text for the suggestion proxy.

use serde_json::Value;

pub const SUGGESTION_SYSTEM: &str = "You are a careful resume reviewer. \
    Point out concrete improvements to wording, structure, and missing details. \
    Do not invent facts that are not in the resume.";

const SUGGESTION_PREFIX: &str = "Suggest improvements for this resume:";

/// The prefix line followed by the pretty-printed payload.
pub fn build_suggestion_prompt(payload: &Value) -> Result<String, serde_json::Error> {
    Ok(format!(
        "{SUGGESTION_PREFIX}\n{}",
        serde_json::to_string_pretty(payload)?
    ))
}
