//! Error types for document text extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting text from an uploaded document.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The file could not be classified as any supported format.
    #[error("Unsupported file type: {0}. Supported formats: PDF, TXT, PPT, PPTX")]
    UnsupportedFormat(String),

    /// Legacy binary PowerPoint is recognized but never parsed.
    #[error("PPT files (not PPTX) are not supported. Please convert to PPTX or PDF format.")]
    LegacyFormatUnsupported,

    /// Failed to parse the PDF document or one of its pages.
    #[error("Failed to extract PDF text: {0}")]
    PdfParseError(String),

    /// Failed to parse the PPTX archive.
    #[error("Failed to extract text from PowerPoint file: {0}")]
    PptxParseError(String),

    /// The buffer could not be interpreted as text.
    #[error("Failed to read text file: {0}")]
    DecodeError(String),
}
