/// Default generation endpoint base; requests join `{model}:generateContent`
/// onto this.
pub(super) const DEFAULT_BASE_GENERATE: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/";

/// Default model. Must be one that supports the `googleSearch` tool.
pub(super) const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variables consulted for the API key, in order.
pub(super) const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub(super) const USER_AGENT: &str = concat!("marketpulse/", env!("CARGO_PKG_VERSION"));
