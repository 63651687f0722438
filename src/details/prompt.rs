/// Prompt for the per-symbol analysis. Same fencing contract as the
/// recommendation prompt, but a single object rather than an array.
pub(super) fn build(symbol: &str) -> String {
    format!(
        r#"Perform a comprehensive short-term investment analysis (1-3 months) for {symbol} in the Indian Stock Market.
Use Google Search to find the latest technical indicators, news, and earnings reports.

CRITICAL OUTPUT INSTRUCTIONS:
Output strictly valid JSON inside a code block. The JSON must follow this schema:
{{
  "technicalAnalysis": "Detailed paragraph (approx 50-70 words) covering Moving Averages, RSI, MACD, and chart patterns.",
  "fundamentalAnalysis": "Detailed paragraph (approx 50-70 words) covering recent earnings, news catalysts, and sector performance.",
  "targetPrice": "Specific price target in INR (e.g., ₹2,800)",
  "stopLoss": "Specific stop loss price in INR (e.g., ₹2,350)",
  "upsidePotential": "Percentage string (e.g., +12.5%)",
  "confidenceScore": number (0-100, representing the probability of reaching the target based on current indicators),
  "supportLevels": ["Level 1", "Level 2"],
  "resistanceLevels": ["Level 1", "Level 2"]
}}"#
    )
}
