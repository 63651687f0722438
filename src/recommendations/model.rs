use serde::{Deserialize, Serialize};

/// A single AI-suggested pick.
///
/// Fields mirror the schema the model is prompted for. Beyond JSON shape
/// nothing is validated: the price/change display strings and the
/// `sector`/`risk_level` labels pass through exactly as generated, and
/// fields the model omits default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockPick {
    /// Ticker symbol (e.g. "RELIANCE" or "TCS").
    pub symbol: String,
    /// Company name.
    pub name: String,
    /// Current price as a display string in INR (e.g. "₹2,450.00").
    pub price: String,
    /// Signed change string for the last session (e.g. "+1.2%").
    pub change: String,
    /// Numeric change, for sorting and color-coding.
    pub change_percent: f64,
    /// Short rationale for the pick.
    pub reason: String,
    /// Sector label as reported by the model.
    pub sector: String,
    /// Risk label as reported by the model (normally Low/Medium/High).
    pub risk_level: String,
}

/// A web citation the model reports as supporting evidence from the search
/// it performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// One recommendation fetch: the picks plus the citations grounding them.
/// Returned whole or not at all; nothing here is ever partially updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub stocks: Vec<StockPick>,
    pub sources: Vec<GroundingSource>,
}
