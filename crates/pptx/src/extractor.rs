//! PPTX extractor implementation.

use docsum_core::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::io::{Cursor, Read, Seek};
use std::sync::LazyLock;
use zip::ZipArchive;

/// Matches slide parts and captures the numeric slide index.
static SLIDE_ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ppt/slides/slide(\d+)\.xml$").unwrap());

/// Returned for a valid deck that contains no extractable text runs,
/// so callers never silently receive an empty string.
pub const NO_TEXT_FALLBACK: &str = "No text content found in the PowerPoint file.";

/// What to do when a single slide's XML cannot be decoded.
///
/// One corrupt slide should not have to block the rest of a deck, so
/// skipping is the default; aborting is available for callers that want
/// all-or-nothing extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideErrorPolicy {
    /// Skip the bad slide and keep extracting the remainder.
    #[default]
    Skip,
    /// Abort the whole extraction on the first bad slide.
    Abort,
}

/// Extractor for PPTX (Office Open XML) presentations.
pub struct PptxExtractor {
    slide_error_policy: SlideErrorPolicy,
}

impl PptxExtractor {
    /// Create a new PPTX extractor with the default slide error policy.
    pub fn new() -> Self {
        Self {
            slide_error_policy: SlideErrorPolicy::default(),
        }
    }

    /// Override the per-slide error policy.
    pub fn with_slide_error_policy(mut self, policy: SlideErrorPolicy) -> Self {
        self.slide_error_policy = policy;
        self
    }

    /// Extract the text runs of every slide, slides in ascending numeric
    /// order, one run per line.
    ///
    /// ZIP entry enumeration order is unspecified, so slide entries are
    /// sorted by their numeric index before reading.
    pub fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| Error::PptxParseError(format!("not a valid archive: {}", e)))?;

        let mut slides: Vec<(usize, String)> = archive
            .file_names()
            .filter_map(|name| {
                SLIDE_ENTRY_REGEX.captures(name).and_then(|caps| {
                    caps[1].parse().ok().map(|index| (index, name.to_string()))
                })
            })
            .collect();
        slides.sort_by_key(|&(index, _)| index);

        log::debug!("found {} slide(s) in archive", slides.len());

        let mut text = String::new();
        for (index, name) in &slides {
            match slide_text(&mut archive, name) {
                Ok(slide) => text.push_str(&slide),
                Err(e) => match self.slide_error_policy {
                    SlideErrorPolicy::Skip => {
                        log::warn!("skipping slide {}: {}", index, e);
                    }
                    SlideErrorPolicy::Abort => return Err(e),
                },
            }
        }

        let text = text.trim().to_string();
        if text.is_empty() {
            return Ok(NO_TEXT_FALLBACK.to_string());
        }
        Ok(text)
    }
}

impl Default for PptxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Read one slide entry and collect its drawing-text runs.
///
/// Each run is trimmed; runs empty after trimming are dropped, surviving
/// runs are followed by a newline.
fn slide_text<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut entry = archive
        .by_name(name)
        .map_err(|e| Error::PptxParseError(format!("missing entry '{}': {}", name, e)))?;
    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|e| Error::PptxParseError(format!("failed to read '{}': {}", name, e)))?;

    let mut reader = Reader::from_str(&xml);
    reader.trim_text(true);

    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if local_name(e.name().as_ref()) == b"t" => {
                in_text_run = true;
            }
            Ok(Event::End(ref e)) if local_name(e.name().as_ref()) == b"t" => {
                in_text_run = false;
            }
            Ok(Event::Text(ref e)) if in_text_run => {
                let run = e
                    .unescape()
                    .map_err(|err| Error::PptxParseError(format!("bad XML in '{}': {}", name, err)))?;
                let run = run.trim();
                if !run.is_empty() {
                    out.push_str(run);
                    out.push('\n');
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::PptxParseError(format!("bad XML in '{}': {}", name, e)));
            }
            _ => {}
        }
    }

    Ok(out)
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}
