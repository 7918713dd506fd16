//! Domain types for uploaded documents and format classification.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A document handed to the extraction pipeline.
///
/// Carries the raw bytes plus the two routing hints an upload provides:
/// the filename and the declared MIME type. Neither hint is trusted on
/// its own; see [`DocumentFormat::detect`].
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original filename (without path).
    pub name: String,

    /// Declared MIME type. May be empty.
    pub mime: String,

    /// Raw file contents.
    pub data: Vec<u8>,
}

impl UploadedFile {
    /// Create an uploaded file from its parts.
    pub fn new(name: impl Into<String>, mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            data,
        }
    }

    /// Read a file from disk. The name is the final path component and
    /// the MIME type is left empty, so routing is driven by the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        let data = std::fs::read(path)?;
        Ok(Self {
            name,
            mime: String::new(),
            data,
        })
    }
}

/// The format of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    /// Portable Document Format.
    Pdf,
    /// Plain text.
    Txt,
    /// Modern PPTX (Office Open XML).
    Pptx,
    /// Legacy PPT (OLE/CFB binary). Recognized but never parsed.
    PptLegacy,
}

impl DocumentFormat {
    /// Detect format from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Txt),
            "pptx" => Some(Self::Pptx),
            "ppt" => Some(Self::PptLegacy),
            _ => None,
        }
    }

    /// Detect format from a declared MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim() {
            "application/pdf" => Some(Self::Pdf),
            "text/plain" => Some(Self::Txt),
            "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
                Some(Self::Pptx)
            }
            "application/vnd.ms-powerpoint" => Some(Self::PptLegacy),
            _ => None,
        }
    }

    /// Classify an uploaded file from its filename and declared MIME type.
    ///
    /// A recognized extension wins; the MIME type is only consulted when
    /// the filename carries no recognized extension.
    pub fn detect(name: &str, mime: &str) -> Option<Self> {
        Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .or_else(|| Self::from_mime(mime))
    }

    /// Short display name for logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Txt => "TXT",
            Self::Pptx => "PPTX",
            Self::PptLegacy => "PPT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_case_insensitive() {
        assert_eq!(DocumentFormat::from_extension("pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("Txt"), Some(DocumentFormat::Txt));
        assert_eq!(DocumentFormat::from_extension("pptx"), Some(DocumentFormat::Pptx));
        assert_eq!(DocumentFormat::from_extension("ppt"), Some(DocumentFormat::PptLegacy));
        assert_eq!(DocumentFormat::from_extension("docx"), None);
    }

    #[test]
    fn test_extension_beats_mime() {
        // A .pdf name routes to PDF even when the declared MIME disagrees.
        assert_eq!(
            DocumentFormat::detect("report.pdf", "text/plain"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::detect("deck.PPTX", "application/pdf"),
            Some(DocumentFormat::Pptx)
        );
    }

    #[test]
    fn test_mime_fallback_without_extension() {
        assert_eq!(
            DocumentFormat::detect("report", "application/pdf"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::detect("notes", "text/plain"),
            Some(DocumentFormat::Txt)
        );
        assert_eq!(
            DocumentFormat::detect(
                "deck",
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            ),
            Some(DocumentFormat::Pptx)
        );
        assert_eq!(
            DocumentFormat::detect("deck", "application/vnd.ms-powerpoint"),
            Some(DocumentFormat::PptLegacy)
        );
    }

    #[test]
    fn test_unrecognized_extension_falls_back_to_mime() {
        assert_eq!(
            DocumentFormat::detect("notes.text", "text/plain"),
            Some(DocumentFormat::Txt)
        );
    }

    #[test]
    fn test_unknown_file() {
        assert_eq!(DocumentFormat::detect("image.png", "image/png"), None);
        assert_eq!(DocumentFormat::detect("blob", ""), None);
    }

    #[test]
    fn test_multi_dot_name_uses_last_extension() {
        assert_eq!(
            DocumentFormat::detect("notes.backup.pdf", ""),
            Some(DocumentFormat::Pdf)
        );
    }
}
