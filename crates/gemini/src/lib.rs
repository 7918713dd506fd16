//! Client for the Gemini summarization endpoint.
//!
//! Request building and response parsing are plain functions over typed
//! wire structs, so everything except the HTTP round trip is testable
//! without a network.

pub mod client;
pub mod error;

pub use client::{GeminiClient, API_KEY_VAR, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
