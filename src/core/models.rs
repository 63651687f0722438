use serde::{Deserialize, Serialize};
use std::fmt;

/* ----- FILTERS (shared by recommendations/ and prompt text) ----- */

/// Market sector filter for recommendation fetches.
///
/// Only parameterizes the prompt text. The `sector` labels the model
/// returns in [`StockPick`](crate::StockPick) are free text and are not
/// validated against this enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sector {
    /// No sector filter; prompts ask for picks across "diverse sectors".
    #[default]
    #[serde(rename = "All Sectors")]
    All,
    Technology,
    Finance,
    Healthcare,
    Energy,
    #[serde(rename = "Consumer Goods")]
    ConsumerGoods,
}

impl Sector {
    /// The display label, as embedded verbatim in prompt text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Sector::All => "All Sectors",
            Sector::Technology => "Technology",
            Sector::Finance => "Finance",
            Sector::Healthcare => "Healthcare",
            Sector::Energy => "Energy",
            Sector::ConsumerGoods => "Consumer Goods",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk appetite for recommendation fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
    Aggressive,
}

impl RiskLevel {
    /// The display label, as embedded verbatim in prompt text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
