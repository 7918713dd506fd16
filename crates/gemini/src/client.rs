//! Gemini client implementation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default `generateContent` endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1/models/gemini-2.5-flash:generateContent";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const SUMMARY_PROMPT: &str = "Summarize the following content clearly and concisely:";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<ContentBlock>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentBlock {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentBlock,
}

/// Client for the Gemini summarization endpoint.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client with the given API key.
    ///
    /// Fails with [`Error::MissingCredential`] when the key is blank, so
    /// misconfiguration surfaces before any extraction or network work.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingCredential);
        }
        Ok(Self {
            http: reqwest::blocking::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
        })
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        Self::new(std::env::var(API_KEY_VAR).unwrap_or_default())
    }

    /// Override the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Summarize the given content.
    ///
    /// Whitespace-only input fails with [`Error::EmptyContent`] before
    /// any request is issued. Failures are not retried; the caller must
    /// re-trigger.
    pub fn summarize(&self, content: &str) -> Result<String> {
        if content.trim().is_empty() {
            return Err(Error::EmptyContent);
        }

        let body = build_request(content);
        log::debug!(
            "requesting summary for {} characters of content",
            content.len()
        );

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        parse_response(status, &body)
    }
}

/// Wrap content in the fixed summary prompt and the request envelope.
fn build_request(content: &str) -> GenerateContentRequest {
    let prompt = format!("{}\n\n{}", SUMMARY_PROMPT, content);
    GenerateContentRequest {
        contents: vec![ContentBlock {
            parts: vec![Part { text: prompt }],
        }],
    }
}

/// Interpret an endpoint response.
///
/// Unparseable JSON is an upstream failure regardless of status; a
/// success status whose JSON lacks the first candidate's first text part
/// (or carries an empty one) is a malformed response.
fn parse_response(status: u16, body: &str) -> Result<String> {
    let json: serde_json::Value = serde_json::from_str(body).map_err(|_| Error::Upstream {
        status,
        message: format!("invalid JSON response: {}", truncate(body)),
    })?;

    if !(200..300).contains(&status) {
        let message = json
            .pointer("/error/message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("API request failed with status {}", status));
        return Err(Error::Upstream { status, message });
    }

    let response: GenerateContentResponse =
        serde_json::from_value(json).map_err(|e| Error::MalformedResponse(e.to_string()))?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| Error::MalformedResponse("no summary candidate in response".to_string()))
}

fn truncate(body: &str) -> String {
    body.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_embeds_content_in_prompt() {
        let request = build_request("Hello world");
        let json = serde_json::to_value(&request).unwrap();

        let text = json["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.starts_with(SUMMARY_PROMPT));
        assert!(text.ends_with("\n\nHello world"));
    }

    #[test]
    fn test_parse_success_response() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Summary."}]}}]}"#;
        assert_eq!(parse_response(200, body).unwrap(), "Summary.");
    }

    #[test]
    fn test_parse_response_without_candidates() {
        let err = parse_response(200, r#"{"candidates":[]}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_response_with_empty_summary() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#;
        let err = parse_response(200, body).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_error_response_uses_upstream_message() {
        let body = r#"{"error":{"message":"API key not valid","code":400}}"#;
        match parse_response(400, body).unwrap_err() {
            Error::Upstream { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_non_json_response() {
        match parse_response(502, "<html>Bad Gateway</html>").unwrap_err() {
            Error::Upstream { status, message } => {
                assert_eq!(status, 502);
                assert!(message.contains("invalid JSON"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_content_rejected_before_any_request() {
        let client = GeminiClient::new("test-key").unwrap();
        assert!(matches!(client.summarize(""), Err(Error::EmptyContent)));
        assert!(matches!(client.summarize("   \n"), Err(Error::EmptyContent)));
    }

    #[test]
    fn test_blank_credential_rejected() {
        assert!(matches!(GeminiClient::new(""), Err(Error::MissingCredential)));
        assert!(matches!(GeminiClient::new("  "), Err(Error::MissingCredential)));
    }
}
