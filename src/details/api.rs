use crate::core::{PulseClient, PulseError, extract};
use crate::details::model::StockDetails;
use crate::details::prompt;

pub(super) async fn fetch_details(
    client: &PulseClient,
    symbol: &str,
) -> Result<StockDetails, PulseError> {
    let prompt = prompt::build(symbol);
    let reply = client.generate(&prompt, true).await?;

    // Invocation errors propagate above; from here on, a reply that holds
    // no usable analysis degrades to the placeholder instead of erroring.
    let details = match extract::extract_json(&reply.text) {
        Ok(value) => serde_json::from_value(value).unwrap_or_else(|_e| {
            #[cfg(feature = "tracing")]
            tracing::debug!(symbol, error = %_e, "detail payload did not decode, substituting placeholder");
            StockDetails::unavailable()
        }),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(symbol, error = %_e, "no JSON in detail reply, substituting placeholder");
            StockDetails::unavailable()
        }
    };

    Ok(details)
}
