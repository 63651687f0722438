//! Per-symbol deep-dive analysis, sized for a detail view.

mod api;
mod model;
mod prompt;

pub use model::StockDetails;

use crate::{PulseClient, PulseError};

/// Fetches the short-term analysis for one symbol.
///
/// # Errors
///
/// Returns a `PulseError` only when the model invocation itself fails; see
/// [`StockDetailsBuilder::fetch`].
pub async fn stock_details(
    client: &PulseClient,
    symbol: impl Into<String>,
) -> Result<StockDetails, PulseError> {
    StockDetailsBuilder::new(client, symbol).fetch().await
}

/// A builder for fetching the AI analysis of a specific symbol.
pub struct StockDetailsBuilder {
    client: PulseClient,
    symbol: String,
}

impl StockDetailsBuilder {
    /// Creates a new `StockDetailsBuilder` for a given symbol.
    pub fn new(client: &PulseClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns a [`PulseError`] only when the model invocation itself
    /// fails. A reply with no usable JSON resolves to
    /// [`StockDetails::unavailable`] instead of an error, so a detail view
    /// always has something to render.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %self.symbol))
    )]
    pub async fn fetch(self) -> Result<StockDetails, PulseError> {
        api::fetch_details(&self.client, &self.symbol).await
    }
}
