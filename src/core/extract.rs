//! Best-effort extraction of a JSON payload from free-form model text.
//!
//! Grounded replies cannot use the structured-output MIME type, so the model
//! is *instructed* to wrap its JSON in a fenced code block but is not
//! guaranteed to. Three tiers, first fence found wins: a ```json fence, then
//! any fence, then the raw text itself.

use serde_json::Value;

use crate::core::PulseError;

const JSON_FENCE_OPEN: &str = "```json\n";
const FENCE: &str = "```";

/// Extract the JSON payload embedded in `text`.
///
/// # Errors
///
/// Returns [`PulseError::Parse`] when no fence is present and the raw text
/// is not valid JSON, or when the first fence found does not contain valid
/// JSON. Once a fence matched, the later tiers are not tried; an unintended
/// embedded code block can therefore shadow a valid payload, the accepted
/// cost of not shipping a grammar-aware scanner.
pub(crate) fn extract_json(text: &str) -> Result<Value, PulseError> {
    let payload = json_fence(text)
        .or_else(|| any_fence(text))
        .unwrap_or(text);
    serde_json::from_str(payload).map_err(|e| PulseError::Parse(e.to_string()))
}

/// Interior of the first ```json fence, closed by a newline and ```.
fn json_fence(text: &str) -> Option<&str> {
    let start = text.find(JSON_FENCE_OPEN)? + JSON_FENCE_OPEN.len();
    let end = text[start..].find("\n```")?;
    Some(&text[start..start + end])
}

/// Interior of the first generic fence.
fn any_fence(text: &str) -> Option<&str> {
    let start = text.find(FENCE)? + FENCE.len();
    let end = text[start..].find(FENCE)?;
    Some(&text[start..start + end])
}
