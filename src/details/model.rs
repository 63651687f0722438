use serde::{Deserialize, Serialize};

/// Short-term (1-3 month) analysis of a single symbol.
///
/// One per symbol per fetch; a new fetch fully replaces any prior value,
/// never merges with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockDetails {
    /// Technical picture: moving averages, RSI, MACD, chart patterns.
    pub technical_analysis: String,
    /// Fundamental picture: recent earnings, news catalysts, sector performance.
    pub fundamental_analysis: String,
    /// Price target as a display string in INR (e.g. "₹2,800").
    pub target_price: String,
    /// Stop loss as a display string in INR (e.g. "₹2,350").
    pub stop_loss: String,
    /// Upside as a signed percentage string (e.g. "+12.5%").
    pub upside_potential: String,
    /// Probability (0-100) of reaching the target on current indicators.
    pub confidence_score: u8,
    /// Support price levels, nearest first.
    pub support_levels: Vec<String>,
    /// Resistance price levels, nearest first.
    pub resistance_levels: Vec<String>,
}

impl StockDetails {
    /// The placeholder substituted when the model's reply held no usable
    /// analysis, so a detail view degrades instead of crashing.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            technical_analysis: "Analysis currently unavailable.".to_string(),
            fundamental_analysis: "Analysis currently unavailable.".to_string(),
            target_price: "N/A".to_string(),
            stop_loss: "N/A".to_string(),
            upside_potential: "N/A".to_string(),
            confidence_score: 0,
            support_levels: Vec::new(),
            resistance_levels: Vec::new(),
        }
    }
}
