//! `marketpulse`: AI-driven short-term stock picks for the Indian market (NSE/BSE).
//!
//! The crate sends natural-language prompts to the hosted Gemini
//! `generateContent` endpoint with the Google Search grounding tool enabled,
//! then parses the model's loosely-structured replies into typed records.
//! Grounded requests cannot use the structured-output response mode, so the
//! model is instructed to fence its JSON and the reply text is parsed
//! best-effort (see [`mod@core`]).
//!
//! Two fetch surfaces make up the public API:
//! - [`RecommendationsBuilder`] (or [`recommendations()`]) for a batch of
//!   trending picks filtered by [`Sector`] and [`RiskLevel`], together with
//!   the web citations that grounded them.
//! - [`StockDetailsBuilder`] (or [`stock_details()`]) for a per-symbol
//!   technical/fundamental analysis.
//!
//! ```no_run
//! use marketpulse::{PulseClient, RiskLevel, Sector};
//!
//! # async fn run() -> Result<(), marketpulse::PulseError> {
//! // Reads GEMINI_API_KEY (or API_KEY) from the environment.
//! let client = PulseClient::builder().build()?;
//!
//! let result = marketpulse::recommendations(&client, Sector::Technology, RiskLevel::Medium).await?;
//! for pick in &result.stocks {
//!     println!("{:10} {:>12} {:>8}  {}", pick.symbol, pick.price, pick.change, pick.reason);
//! }
//!
//! let details = marketpulse::stock_details(&client, "RELIANCE").await?;
//! println!("target {} / stop {}", details.target_price, details.stop_loss);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod details;
pub mod recommendations;

pub use crate::core::{PulseClient, PulseClientBuilder, PulseError, RiskLevel, Sector};
pub use crate::details::{StockDetails, StockDetailsBuilder, stock_details};
pub use crate::recommendations::{
    AnalysisResult, GroundingSource, RecommendationsBuilder, StockPick, recommendations,
};
