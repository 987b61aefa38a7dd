//! Document text extraction for résumé files.
//!
//! Supports PDF, DOCX, and plain-text inputs, selected by file extension.
//! Extraction failures are hard errors: unlike the collectors, a résumé
//! that cannot be read aborts the run with a typed error naming the format.

use std::fs;
use std::io::Read;
use std::path::Path;

use outreach_core::error::{OutreachError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

/// Extracts normalized plain text from a résumé document.
pub struct DocumentExtractor;

impl DocumentExtractor {
    /// Extracts the text content of the file at `path`.
    ///
    /// The file must exist (checked before any format-specific logic) and
    /// carry a supported extension (checked before the file is opened).
    /// Output is trimmed of leading and trailing whitespace.
    pub fn extract(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(OutreachError::not_found(
                "file",
                path.display().to_string(),
            ));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        let text = match extension.as_str() {
            "pdf" => extract_pdf(path)?,
            "docx" => extract_docx(path)?,
            "txt" => extract_txt(path)?,
            "" => return Err(OutreachError::unsupported_format("(none)")),
            other => return Err(OutreachError::unsupported_format(format!(".{other}"))),
        };

        debug!(path = %path.display(), bytes = text.len(), "extracted document text");
        Ok(text.trim().to_string())
    }
}

/// Concatenates per-page text in page order. A page with no extractable
/// text contributes an empty string rather than failing the document.
fn extract_pdf(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path)
        .map_err(|err| OutreachError::extraction("PDF", err.to_string()))
}

/// Concatenates paragraph text in document order, one paragraph per line.
///
/// A DOCX file is a zip archive; the paragraph runs live in
/// `word/document.xml` as `<w:p>` elements containing `<w:t>` text runs.
fn extract_docx(path: &Path) -> Result<String> {
    let file = fs::File::open(path)
        .map_err(|err| OutreachError::extraction("DOCX", err.to_string()))?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|err| OutreachError::extraction("DOCX", err.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|err| OutreachError::extraction("DOCX", err.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|err| OutreachError::extraction("DOCX", err.to_string()))?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => match element.name().as_ref() {
                b"w:t" => in_text_run = true,
                b"w:tab" => current.push('\t'),
                _ => {}
            },
            Ok(Event::Empty(element)) => {
                if element.name().as_ref() == b"w:tab" {
                    current.push('\t');
                }
            }
            Ok(Event::End(element)) => match element.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(text)) => {
                if in_text_run {
                    let value = text
                        .decode()
                        .map_err(|err| OutreachError::extraction("DOCX", err.to_string()))?;
                    current.push_str(&value);
                }
            }
            // Entity references inside text runs arrive as separate events.
            Ok(Event::GeneralRef(reference)) => {
                if in_text_run {
                    let name: &[u8] = &reference;
                    match name {
                        b"amp" => current.push('&'),
                        b"lt" => current.push('<'),
                        b"gt" => current.push('>'),
                        b"quot" => current.push('"'),
                        b"apos" => current.push('\''),
                        _ => {
                            if let Ok(Some(ch)) = reference.resolve_char_ref() {
                                current.push(ch);
                            }
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(OutreachError::extraction("DOCX", err.to_string())),
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n"))
}

/// Returns the decoded file contents verbatim.
fn extract_txt(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| OutreachError::extraction("TXT", err.to_string()))
}
