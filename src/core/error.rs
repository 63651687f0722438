use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum PulseError {
    /// No API key was configured.
    ///
    /// The key comes from [`PulseClientBuilder::api_key`](crate::PulseClientBuilder::api_key)
    /// or, failing that, the `GEMINI_API_KEY` / `API_KEY` environment
    /// variables. Both fetch surfaces need it, so its absence fails
    /// [`build()`](crate::PulseClientBuilder::build) before any request is made.
    #[error("API key is missing (set GEMINI_API_KEY or API_KEY, or use PulseClientBuilder::api_key)")]
    MissingApiKey,

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// No parseable JSON payload was found in the model's reply text.
    ///
    /// Fatal for recommendation fetches; the detail fetch substitutes
    /// [`StockDetails::unavailable`](crate::StockDetails::unavailable) instead.
    #[error("no JSON payload in model response: {0}")]
    Parse(String),
}
