//! Document Normalizer.
//!
//! Converts raw document bytes (PDF, DOC, DOCX, plain text, HTML) into
//! clean, whitespace-normalized plain text: paragraph boundaries become
//! single newlines, whitespace runs collapse to one space, and control
//! characters are stripped. Format parsers that cannot produce any text
//! surface `CorruptDocument` instead of an empty string, so downstream
//! scoring never mistakes "could not read" for "no skills found".

use std::io::Read;
use std::sync::LazyLock;

use dom_query::Document;
use regex::Regex;

use crate::encoding::{decode_lossy, detect_html_encoding, detect_text_encoding};
use crate::error::{Error, Result};
use crate::html;
use crate::result::MimeKind;

/// Matches DOCX text runs, paragraph ends, breaks, and tabs inside
/// `word/document.xml`.
#[allow(clippy::expect_used)]
static DOCX_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|</w:p>|<w:(?:br|tab)\s*/>").expect("DOCX_RUN regex")
});

/// Convert document bytes to normalized plain text.
///
/// # Errors
///
/// - `UnsupportedFormat` when the byte stream is empty.
/// - `CorruptDocument` when the format parser produces no text (for
///   example an encrypted PDF or a truncated DOCX archive).
pub fn normalize(bytes: &[u8], kind: MimeKind) -> Result<String> {
    if bytes.is_empty() {
        return Err(Error::UnsupportedFormat("empty byte stream".to_string()));
    }

    let text = match kind {
        MimeKind::Text => decode_lossy(bytes, detect_text_encoding(bytes)),
        MimeKind::Html => html_text(bytes),
        MimeKind::Pdf => pdf_text(bytes)?,
        MimeKind::Docx => docx_text(bytes)?,
        MimeKind::Doc => legacy_doc_text(bytes),
    };

    let normalized = normalize_whitespace(&text);
    if normalized.is_empty() {
        return Err(Error::CorruptDocument(
            "document yielded no text content".to_string(),
        ));
    }
    Ok(normalized)
}

/// Canonicalize whitespace: strip control characters, collapse runs of
/// whitespace to one space within a line, drop blank lines, and join
/// paragraphs with single newlines.
///
/// Idempotent: feeding the output back in returns it unchanged.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let printable: String = text
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();

    printable
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode and flatten an HTML byte stream to block-aware plain text.
fn html_text(bytes: &[u8]) -> String {
    let markup = decode_lossy(bytes, detect_html_encoding(bytes));
    let doc = Document::from(markup.as_str());
    html::clean_document(&doc);
    let body = doc.select("body");
    if body.length() > 0 {
        html::flatten_to_text(&body.html())
    } else {
        html::flatten_to_text(&markup)
    }
}

/// Extract text from a PDF.
fn pdf_text(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| Error::CorruptDocument(format!("PDF text extraction failed: {e}")))
}

/// Extract text from a DOCX archive (`word/document.xml` text runs).
fn docx_text(bytes: &[u8]) -> Result<String> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| Error::CorruptDocument(format!("not a DOCX archive: {e}")))?;
    let mut part = archive
        .by_name("word/document.xml")
        .map_err(|e| Error::CorruptDocument(format!("DOCX missing document part: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| Error::CorruptDocument(format!("DOCX document part unreadable: {e}")))?;

    let mut text = String::new();
    for caps in DOCX_RUN.captures_iter(&xml) {
        if let Some(run) = caps.get(1) {
            text.push_str(&html::unescape_entities(run.as_str()));
        } else {
            // Paragraph end, line break, or tab
            text.push('\n');
        }
    }
    Ok(text)
}

/// Best-effort text salvage from a legacy binary .doc file.
///
/// There is no OLE parser in the stack; like the original product this
/// does a lossy sweep, keeping printable runs long enough to be words.
fn legacy_doc_text(bytes: &[u8]) -> String {
    let mut text = String::new();
    let mut run = String::new();
    for &b in bytes {
        let c = b as char;
        if b.is_ascii_graphic() || b == b' ' {
            run.push(c);
        } else {
            if run.trim().len() >= 4 {
                text.push_str(run.trim());
                text.push('\n');
            }
            run.clear();
        }
    }
    if run.trim().len() >= 4 {
        text.push_str(run.trim());
        text.push('\n');
    }
    text
}
