//! Format dispatch: classify an uploaded document and route it to the
//! matching text extractor, presenting one contract to callers.

use docsum_core::{decode_text, DocumentFormat, Error, Result, UploadedFile};
use docsum_pdf::PdfExtractor;
use docsum_pptx::PptxExtractor;

/// Classify an uploaded file, failing when no supported format matches.
///
/// A recognized filename extension wins; the declared MIME type is the
/// fallback when the extension is absent or unrecognized.
pub fn classify(file: &UploadedFile) -> Result<DocumentFormat> {
    DocumentFormat::detect(&file.name, &file.mime).ok_or_else(|| {
        let hint = if file.mime.trim().is_empty() {
            "unknown".to_string()
        } else {
            file.mime.trim().to_string()
        };
        Error::UnsupportedFormat(hint)
    })
}

/// Extract plain text from an uploaded file.
///
/// The composed classify-route-trim pipeline; the one entry point the
/// rest of the application uses.
pub fn extract_text(file: &UploadedFile) -> Result<String> {
    let format = classify(file)?;
    extract_as(file, format)
}

/// Extract plain text from a file already classified as `format`.
///
/// Legacy binary PPT is rejected here, before any extractor runs. The
/// result is trimmed; an empty string is success for formats other than
/// PPTX (whose extractor substitutes a sentinel), and the caller decides
/// whether empty text is usable.
pub fn extract_as(file: &UploadedFile, format: DocumentFormat) -> Result<String> {
    log::debug!(
        "extracting '{}' as {} ({} bytes)",
        file.name,
        format.name(),
        file.data.len()
    );

    let text = match format {
        DocumentFormat::Pdf => PdfExtractor::new().extract(&file.data)?,
        DocumentFormat::Txt => decode_text(&file.data)?,
        DocumentFormat::Pptx => PptxExtractor::new().extract(&file.data)?,
        DocumentFormat::PptLegacy => return Err(Error::LegacyFormatUnsupported),
    };

    Ok(text.trim().to_string())
}
