use serde_json::Value;

use crate::core::models::{RiskLevel, Sector};
use crate::core::wire::GroundingChunk;
use crate::core::{PulseClient, PulseError, extract};
use crate::recommendations::model::{AnalysisResult, GroundingSource, StockPick};
use crate::recommendations::prompt;

pub(super) async fn fetch_recommendations(
    client: &PulseClient,
    sector: Sector,
    risk: RiskLevel,
    count: u32,
) -> Result<AnalysisResult, PulseError> {
    let prompt = prompt::build(sector, risk, count);
    let reply = client.generate(&prompt, true).await?;

    let value = extract::extract_json(&reply.text)?;
    let stocks = decode_picks(value)?;
    let sources = web_sources(reply.grounding_chunks);

    Ok(AnalysisResult { stocks, sources })
}

/// The extracted payload must at least be an array of objects; within each
/// object, missing fields default rather than error (the rendering layer
/// treats everything as display-ready free text anyway).
fn decode_picks(value: Value) -> Result<Vec<StockPick>, PulseError> {
    serde_json::from_value(value).map_err(|e| PulseError::Data(format!("stock picks decode: {e}")))
}

/// Keep web citations, in reply order; other chunk kinds carry no link to
/// surface and are skipped.
fn web_sources(chunks: Vec<GroundingChunk>) -> Vec<GroundingSource> {
    chunks
        .into_iter()
        .filter_map(|chunk| match chunk {
            GroundingChunk::Web { web } => Some(GroundingSource {
                title: web.title,
                uri: web.uri,
            }),
            GroundingChunk::Other(_) => None,
        })
        .collect()
}
