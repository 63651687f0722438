//! Trending-pick recommendations filtered by sector and risk appetite.

mod api;
mod model;
mod prompt;

pub use model::{AnalysisResult, GroundingSource, StockPick};

use crate::core::models::{RiskLevel, Sector};
use crate::{PulseClient, PulseError};

/// Fetches recommendations with the default settings.
///
/// # Errors
///
/// Returns a `PulseError` if the model invocation fails or its reply holds
/// no extractable JSON array of picks.
pub async fn recommendations(
    client: &PulseClient,
    sector: Sector,
    risk: RiskLevel,
) -> Result<AnalysisResult, PulseError> {
    RecommendationsBuilder::new(client, sector, risk).fetch().await
}

/// A builder for fetching AI stock picks for a sector/risk combination.
pub struct RecommendationsBuilder {
    client: PulseClient,
    sector: Sector,
    risk: RiskLevel,
    count: u32,
}

impl RecommendationsBuilder {
    /// Creates a new `RecommendationsBuilder` for the given filters.
    pub fn new(client: &PulseClient, sector: Sector, risk: RiskLevel) -> Self {
        Self {
            client: client.clone(),
            sector,
            risk,
            count: 10,
        }
    }

    /// Sets how many picks to ask the model for. Default: 10.
    #[must_use]
    pub const fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Executes the request and fetches picks plus grounding sources.
    ///
    /// # Errors
    ///
    /// Returns a [`PulseError`] if the model invocation fails, or if its
    /// reply holds no extractable JSON array of picks. Unlike the detail
    /// fetch, this path has no fallback object: the result is returned
    /// whole or not at all.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(sector = %self.sector, risk = %self.risk))
    )]
    pub async fn fetch(self) -> Result<AnalysisResult, PulseError> {
        api::fetch_recommendations(&self.client, self.sector, self.risk, self.count).await
    }
}
