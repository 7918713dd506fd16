//! PDF extractor implementation.
//!
//! Text is collected in content-stream emission order, not visual
//! reading order, so multi-column layouts may interleave. This is a
//! known limitation of the extraction contract, not an accident.

use docsum_core::{Error, Result};
use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};
use std::collections::BTreeMap;

/// Extractor for PDF documents.
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract the text of every page, in ascending page order.
    ///
    /// Within a page, the payload of each text-showing operator is taken
    /// in emission order and joined with single spaces. Pages are joined
    /// with one blank line, and the final result is trimmed.
    ///
    /// Any failure while opening the document or reading a page aborts
    /// the whole extraction; there are no partial-document results.
    pub fn extract(&self, bytes: &[u8]) -> Result<String> {
        let handle = PdfDocumentHandle::open(bytes)?;
        log::debug!("extracting {} PDF page(s)", handle.page_count());

        let mut pages = Vec::with_capacity(handle.page_count());
        for (number, page_id) in handle.pages() {
            pages.push(handle.page_text(number, page_id)?);
        }

        Ok(pages.join("\n\n").trim().to_string())
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// A decoded PDF document plus its ordered page map.
///
/// Lives only for the duration of one extraction call.
struct PdfDocumentHandle {
    doc: Document,
    pages: BTreeMap<u32, ObjectId>,
}

impl PdfDocumentHandle {
    fn open(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes)
            .map_err(|e| Error::PdfParseError(e.to_string()))?;

        if doc.is_encrypted() {
            return Err(Error::PdfParseError(
                "encrypted documents are not supported".to_string(),
            ));
        }

        let pages = doc.get_pages();
        Ok(Self { doc, pages })
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn pages(&self) -> impl Iterator<Item = (u32, ObjectId)> + '_ {
        self.pages.iter().map(|(&number, &id)| (number, id))
    }

    /// Collect the text payloads of one page's content stream.
    fn page_text(&self, number: u32, page_id: ObjectId) -> Result<String> {
        // Font name -> declared encoding, switched by Tf operators below.
        let encodings: BTreeMap<Vec<u8>, &str> = self
            .doc
            .get_page_fonts(page_id)
            .into_iter()
            .map(|(name, font)| (name, font.get_font_encoding()))
            .collect();

        let data = self
            .doc
            .get_page_content(page_id)
            .map_err(|e| Error::PdfParseError(format!("page {}: {}", number, e)))?;
        let content = Content::decode(&data)
            .map_err(|e| Error::PdfParseError(format!("page {}: {}", number, e)))?;

        let mut runs: Vec<String> = Vec::new();
        let mut current_encoding = None;

        for op in &content.operations {
            match op.operator.as_ref() {
                "Tf" => {
                    if let Some(font) = op.operands.first().and_then(|o| o.as_name().ok()) {
                        current_encoding = encodings.get(font).copied();
                    }
                }
                // Tj and ' carry the string as their only operand.
                "Tj" | "'" => push_run(&mut runs, current_encoding, op.operands.first()),
                // " sets word/char spacing first; the string is third.
                "\"" => push_run(&mut runs, current_encoding, op.operands.get(2)),
                "TJ" => {
                    if let Some(Object::Array(items)) = op.operands.first() {
                        let mut run = String::new();
                        for item in items {
                            if let Object::String(bytes, _) = item {
                                run.push_str(&Document::decode_text(current_encoding, bytes));
                            }
                        }
                        if !run.is_empty() {
                            runs.push(run);
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(runs.join(" "))
    }
}

fn push_run(runs: &mut Vec<String>, encoding: Option<&str>, operand: Option<&Object>) {
    if let Some(Object::String(bytes, _)) = operand {
        let text = Document::decode_text(encoding, bytes);
        if !text.is_empty() {
            runs.push(text);
        }
    }
}
