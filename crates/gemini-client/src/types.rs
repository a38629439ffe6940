//! Wire envelopes for the `generateContent` endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Request body: a single turn with a single text part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateRequest {
    /// Wraps one text into the single-turn, single-part envelope.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: text.into() }],
            }],
        }
    }
}

/// Response body. Every level is optional so that missing and empty
/// containers collapse into the same "no usable text" outcome.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

/// One alternative generated by the model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate, if it is non-empty.
    ///
    /// Further candidates and parts are ignored.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_deref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_deref()?
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}

/// Successful result of a generation call. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedText {
    text: String,
}

impl GeneratedText {
    /// Returns `None` for empty text.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        (!text.is_empty()).then_some(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for GeneratedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> GenerateResponse {
        match serde_json::from_str(raw) {
            Ok(resp) => resp,
            Err(e) => panic!("fixture should decode: {e}"),
        }
    }

    #[test]
    fn request_serializes_to_nested_envelope() {
        let body = serde_json::to_value(GenerateRequest::from_text("hi")).unwrap_or_default();
        assert_eq!(body, serde_json::json!({"contents": [{"parts": [{"text": "hi"}]}]}));
    }

    #[test]
    fn first_text_picks_first_candidate_first_part() {
        let resp = parse(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"one"},{"text":"two"}],"role":"model"},"finishReason":"STOP"},
                {"content":{"parts":[{"text":"other"}]}}
            ]}"#,
        );
        assert_eq!(resp.first_text(), Some("one"));
    }

    #[test]
    fn first_text_keeps_whitespace() {
        let resp = parse(r#"{"candidates":[{"content":{"parts":[{"text":"  padded\n"}]}}]}"#);
        assert_eq!(resp.first_text(), Some("  padded\n"));
    }

    #[test]
    fn missing_and_empty_levels_yield_none() {
        for raw in [
            r#"{}"#,
            r#"{"candidates":null}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{}}]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{}]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#,
        ] {
            assert_eq!(parse(raw).first_text(), None, "body: {raw}");
        }
    }

    #[test]
    fn generated_text_displays_verbatim() {
        let text = GeneratedText::new("Hello").expect("non-empty");
        assert_eq!(text.to_string(), "Hello");
        assert_eq!(text.as_str(), "Hello");
        assert_eq!(text.into_text(), "Hello");
    }

    #[test]
    fn generated_text_rejects_empty() {
        assert_eq!(GeneratedText::new(""), None);
        assert_eq!(GeneratedText::new(" ").map(GeneratedText::into_text), Some(" ".to_string()));
    }
}
