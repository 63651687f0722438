#![allow(dead_code)]

use httpmock::MockServer;
use marketpulse::PulseClient;
use serde_json::{Value, json};
use url::Url;

pub const TEST_MODEL: &str = "gemini-2.5-flash";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Path the client is expected to POST to for the default model.
pub fn generate_path() -> String {
    format!("/{TEST_MODEL}:generateContent")
}

/// A client pointed at the mock server, keyed so the environment is never read.
pub fn client_for(server: &MockServer) -> PulseClient {
    PulseClient::builder()
        .api_key("test-key")
        .base_generate(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}

/// A minimal `generateContent` envelope carrying one text part.
pub fn gemini_text_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP",
            "index": 0
        }]
    })
}

/// Same, plus grounding chunks (raw JSON array, as the API would send them).
pub fn gemini_grounded_reply(text: &str, chunks: Value) -> Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP",
            "index": 0,
            "groundingMetadata": { "groundingChunks": chunks }
        }]
    })
}

/// Wrap a JSON payload in the fence the prompts ask for, with chatter
/// around it the way the model tends to reply.
pub fn fenced(payload: &Value) -> String {
    format!(
        "Here is the requested data:\n```json\n{}\n```\nLet me know if you need anything else.",
        serde_json::to_string_pretty(payload).unwrap()
    )
}

/// Whether live smoke tests should run (they need a real key and network).
pub fn live_enabled() -> bool {
    std::env::var("PULSE_LIVE").ok().as_deref() == Some("1")
}
