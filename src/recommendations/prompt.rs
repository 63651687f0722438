use crate::core::models::{RiskLevel, Sector};

/// Prompt for a batch of trending picks. The model must answer with *only*
/// a fenced JSON array; grounded requests cannot use the JSON response MIME
/// type, so the fence is the contract the extractor relies on.
pub(super) fn build(sector: Sector, risk: RiskLevel, count: u32) -> String {
    let sector_prompt = match sector {
        Sector::All => "diverse sectors",
        other => other.as_str(),
    };

    format!(
        r#"Find {count} currently trending stocks in the Indian Stock Market (NSE/BSE) suitable for a {risk} risk short-term investment strategy (1-3 months horizon).
Focus on the {sector_prompt} sector in India.

Use Google Search to find the most recent price data (in INR), percentage change from the last session, and key catalysts.

CRITICAL OUTPUT INSTRUCTIONS:
You must output the result strictly as a valid JSON array inside a markdown code block like ```json ... ```.
Do not add any conversational text outside the code block.

The JSON array must contain objects with this exact schema:
{{
  "symbol": "Ticker Symbol (e.g., RELIANCE or TCS)",
  "name": "Company Name",
  "price": "Current Price in INR (e.g., ₹2,450.00)",
  "change": "Change string (e.g., +1.2% or -0.5%)",
  "changePercent": number (e.g., 1.2 or -0.5),
  "reason": "A concise (15-20 words) explanation of why this is a good short-term pick based on recent Indian market news.",
  "sector": "Sector Name",
  "riskLevel": "Low" | "Medium" | "High"
}}"#
    )
}
