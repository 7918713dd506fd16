//! Error types for the summarization client.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while requesting a summary.
#[derive(Error, Debug)]
pub enum Error {
    /// The input was empty or whitespace-only; no request is issued.
    #[error("Content cannot be empty")]
    EmptyContent,

    /// No API key is configured; no request is issued.
    #[error("No Gemini API key configured. Set the GEMINI_API_KEY environment variable.")]
    MissingCredential,

    /// The endpoint answered with a non-success status or unparseable JSON.
    #[error("Gemini API request failed with status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// A success response was missing the expected summary field.
    #[error("Invalid response format from Gemini API: {0}")]
    MalformedResponse(String),

    /// Transport-level failure before a response was received.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}
