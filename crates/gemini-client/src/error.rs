//! Error types for the Gemini client.

use thiserror::Error;

/// Errors returned by [`GeminiClient::generate`](crate::GeminiClient::generate).
///
/// None of these are retried by the client; callers decide how to degrade.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured endpoint URL could not be parsed.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The request envelope could not be encoded as JSON.
    #[error("Failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The endpoint could not be reached, or the response body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("API error ({status}): {}", body_summary(.body))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error body, if it decoded as a JSON object.
        body: Option<serde_json::Value>,
    },

    /// Success status, but the body did not match the response envelope.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Well-formed envelope without any usable text.
    #[error("No response generated")]
    EmptyResponse,
}

impl ClientError {
    /// HTTP status of an [`ClientError::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn body_summary(body: &Option<serde_json::Value>) -> String {
    match body {
        Some(value) => value.to_string(),
        None => "<undecodable body>".to_string(),
    }
}

/// Startup configuration problems. These are fatal to the caller.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting is absent or blank.
    #[error("{0} is required")]
    Missing(&'static str),

    /// The timeout setting is not a whole number of seconds.
    #[error("Invalid timeout '{0}': expected a whole number of seconds")]
    InvalidTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_body() {
        let err = ClientError::Api {
            status: 429,
            body: Some(serde_json::json!({"error": "rate limited"})),
        };
        assert_eq!(err.to_string(), r#"API error (429): {"error":"rate limited"}"#);
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn api_error_display_without_body() {
        let err = ClientError::Api { status: 502, body: None };
        assert_eq!(err.to_string(), "API error (502): <undecodable body>");
    }

    #[test]
    fn status_is_none_for_other_kinds() {
        assert_eq!(ClientError::EmptyResponse.status(), None);
    }

    #[test]
    fn missing_config_names_the_variable() {
        assert_eq!(ConfigError::Missing("GEMINI_API_KEY").to_string(), "GEMINI_API_KEY is required");
    }
}
