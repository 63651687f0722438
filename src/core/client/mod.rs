//! Public client surface + builder.
//! The client owns the HTTP stack, the endpoint configuration, and the API
//! key; the fetch modules drive it through [`PulseClient::generate`].

mod constants;

use constants::{API_KEY_ENV_VARS, DEFAULT_BASE_GENERATE, DEFAULT_MODEL, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::core::PulseError;
use crate::core::wire::{
    Content, GenerateContentRequest, GenerateContentResponse, GoogleSearch, GroundingChunk, Part,
    Tool,
};

/// A digested `generateContent` reply: the first candidate's text plus any
/// grounding chunks the search tool attached.
#[derive(Debug, Default)]
pub(crate) struct ModelReply {
    pub(crate) text: String,
    pub(crate) grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Clone)]
pub struct PulseClient {
    http: Client,
    base_generate: Url,
    model: String,
    api_key: String,
}

impl PulseClient {
    /// Create a new builder.
    pub fn builder() -> PulseClientBuilder {
        PulseClientBuilder::default()
    }

    /// The model id requests are generated with.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one prompt through `generateContent`, with the Google Search
    /// grounding tool enabled when `web_search` is set.
    ///
    /// One shot: no retries, and no timeout unless the builder set one.
    pub(crate) async fn generate(
        &self,
        prompt: &str,
        web_search: bool,
    ) -> Result<ModelReply, PulseError> {
        let url = self
            .base_generate
            .join(&format!("{}:generateContent", self.model))?;

        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            tools: web_search.then(|| {
                vec![Tool {
                    google_search: GoogleSearch {},
                }]
            }),
        };

        let resp = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(PulseError::Status {
                status: resp.status().as_u16(),
                url: resp.url().to_string(),
            });
        }

        let body = resp.text().await?;
        let envelope: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| PulseError::Data(format!("generateContent json parse: {e}")))?;

        Ok(reply_from_envelope(envelope))
    }
}

/// Flatten the provider envelope. Only the first candidate counts; a reply
/// with no candidates digests to empty text, which the extraction layer then
/// treats like any other unparseable reply.
fn reply_from_envelope(envelope: GenerateContentResponse) -> ModelReply {
    let Some(candidate) = envelope
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
    else {
        return ModelReply::default();
    };

    let text: String = candidate
        .content
        .and_then(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    let grounding_chunks = candidate
        .grounding_metadata
        .and_then(|m| m.grounding_chunks)
        .unwrap_or_default();

    ModelReply {
        text,
        grounding_chunks,
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct PulseClientBuilder {
    api_key: Option<String>,
    base_generate: Option<Url>,
    model: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl PulseClientBuilder {
    /// Use this API key instead of reading the environment.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the generation base URL (e.g. to point at a mock server).
    pub fn base_generate(mut self, url: Url) -> Self {
        self.base_generate = Some(url);
        self
    }

    /// Override the model id. Default: `gemini-2.5-flash`.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::MissingApiKey`] when no key was supplied and
    /// none of the `GEMINI_API_KEY` / `API_KEY` environment variables are
    /// set. The check lives here so both fetch surfaces fail before any
    /// network call can be attempted.
    pub fn build(self) -> Result<PulseClient, PulseError> {
        let api_key = match self.api_key {
            Some(key) if !key.is_empty() => key,
            _ => api_key_from_env().ok_or(PulseError::MissingApiKey)?,
        };

        let base_generate = match self.base_generate {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_GENERATE)?,
        };

        let mut httpb =
            Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(PulseClient {
            http: httpb.build()?,
            base_generate,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
        })
    }
}

fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
}
