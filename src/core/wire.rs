//! Serde mapping for the Gemini `generateContent` wire contract (only what
//! we need).

use serde::{Deserialize, Serialize};

/* ---------------- request ---------------- */

#[derive(Serialize)]
pub(crate) struct GenerateContentRequest {
    pub(crate) contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tools: Option<Vec<Tool>>,
}

#[derive(Serialize)]
pub(crate) struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) role: Option<String>,
    pub(crate) parts: Vec<Part>,
}

#[derive(Serialize)]
pub(crate) struct Part {
    pub(crate) text: String,
}

/// Declaring `googleSearch` puts the model in grounded web-search mode.
/// The API rejects it in combination with a JSON response MIME type, so
/// structured replies come back as free text instead (see `core::extract`).
#[derive(Serialize)]
pub(crate) struct Tool {
    #[serde(rename = "googleSearch")]
    pub(crate) google_search: GoogleSearch,
}

#[derive(Serialize)]
pub(crate) struct GoogleSearch {}

/* ---------------- response ---------------- */

#[derive(Deserialize)]
pub(crate) struct GenerateContentResponse {
    pub(crate) candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
pub(crate) struct Candidate {
    pub(crate) content: Option<CandidateContent>,

    #[serde(rename = "groundingMetadata")]
    pub(crate) grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
pub(crate) struct CandidateContent {
    pub(crate) parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
pub(crate) struct CandidatePart {
    pub(crate) text: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct GroundingMetadata {
    #[serde(rename = "groundingChunks")]
    pub(crate) grounding_chunks: Option<Vec<GroundingChunk>>,
}

/// One grounding citation. Anything that is not a web citation (retrieved
/// context, maps, ...) folds into `Other` and carries no link to surface.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum GroundingChunk {
    Web { web: WebSource },
    Other(serde::de::IgnoredAny),
}

#[derive(Debug, Deserialize)]
pub(crate) struct WebSource {
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) uri: String,
}
