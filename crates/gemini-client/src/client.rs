use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::{GenerateRequest, GenerateResponse, GeneratedText};

/// Instruction prepended to every prompt to bound the reply length.
pub const PROMPT_PREFIX: &str = "Keep the response to max of 5 lines";

/// Anything that can turn a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedText, ClientError>;
}

/// Client for a single `generateContent` endpoint.
///
/// Holds no mutable state; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    config: ClientConfig,
}

impl GeminiClient {
    /// Builds the client and its HTTP transport, applying the configured timeout.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends one prompt and returns the first candidate's text.
    ///
    /// Makes exactly one request; nothing is retried.
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedText, ClientError> {
        let url = prepare_url(self.config.endpoint_url(), self.config.api_key())?;
        let body = serde_json::to_vec(&GenerateRequest::from_text(decorate_prompt(prompt)))
            .map_err(ClientError::Serialization)?;

        tracing::debug!(
            "Sending generateContent request | Host: {} | Prompt bytes: {}",
            url.host_str().unwrap_or("<none>"),
            prompt.len()
        );

        let resp = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.ok().and_then(|bytes| decode_error_body(&bytes));
            tracing::debug!("generateContent returned {}", status);
            return Err(ClientError::Api { status: status.as_u16(), body });
        }

        let bytes = resp.bytes().await?;
        parse_response(&bytes)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GeneratedText, ClientError> {
        GeminiClient::generate(self, prompt).await
    }
}

/// Parses the endpoint and sets `key`, keeping every other query parameter.
pub(crate) fn prepare_url(endpoint_url: &str, api_key: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse(endpoint_url)?;
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != "key")
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut().clear().extend_pairs(retained.iter()).append_pair("key", api_key);
    Ok(url)
}

pub(crate) fn decorate_prompt(prompt: &str) -> String {
    format!("{PROMPT_PREFIX}{prompt}")
}

/// Error bodies only count when they decode as a JSON object.
fn decode_error_body(bytes: &[u8]) -> Option<Value> {
    serde_json::from_slice::<serde_json::Map<String, Value>>(bytes).ok().map(Value::Object)
}

fn parse_response(bytes: &[u8]) -> Result<GeneratedText, ClientError> {
    let envelope: GenerateResponse =
        serde_json::from_slice(bytes).map_err(ClientError::Decode)?;
    envelope.first_text().and_then(GeneratedText::new).ok_or(ClientError::EmptyResponse)
}
