//! PPTX (Office Open XML) text extraction backend for document
//! summarization.
//!
//! A .pptx file is a ZIP archive of XML parts; slide text lives in the
//! drawing-text runs of `ppt/slides/slideN.xml`.

pub mod extractor;

pub use extractor::{PptxExtractor, SlideErrorPolicy, NO_TEXT_FALLBACK};
