//! PDF text extraction backend for document summarization.
//!
//! Walks each page's content stream and collects the payload of every
//! text-showing operator. No layout reconstruction is attempted.

pub mod extractor;

pub use extractor::PdfExtractor;
