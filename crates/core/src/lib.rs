//! Core domain types, format classification, and plain-text decoding
//! for document summarization.

pub mod decode;
pub mod error;
pub mod types;

pub use decode::decode_text;
pub use error::{Error, Result};
pub use types::{DocumentFormat, UploadedFile};
