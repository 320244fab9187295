//! Character encoding detection and transcoding.
//!
//! Resume uploads and fetched pages arrive as bytes in whatever encoding
//! the author used. This module detects the charset (BOM for plain text,
//! meta tags for HTML) and decodes to UTF-8, substituting the replacement
//! character for undecodable sequences rather than failing.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::Regex;

/// Match `<meta charset="...">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("valid regex")
});

/// Detect the encoding of an HTML byte stream from its meta tags.
///
/// Only the first 1024 bytes are examined; charset declarations are
/// required to appear early. Defaults to UTF-8 when nothing is declared.
#[must_use]
pub fn detect_html_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some(enc) = bom_encoding(bytes) {
        return enc;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(1024)]);

    for pattern in [&*META_CHARSET, &*HTTP_EQUIV_CHARSET] {
        if let Some(label) = pattern.captures(&head).and_then(|c| c.get(1)) {
            if let Some(enc) = Encoding::for_label(label.as_str().as_bytes()) {
                return enc;
            }
        }
    }

    UTF_8
}

/// Detect the encoding of a plain-text byte stream.
///
/// Plain text carries no declaration, so only a byte-order mark can
/// identify a non-UTF-8 stream. Defaults to UTF-8.
#[must_use]
pub fn detect_text_encoding(bytes: &[u8]) -> &'static Encoding {
    bom_encoding(bytes).unwrap_or(UTF_8)
}

fn bom_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        Some(UTF_8)
    } else if bytes.starts_with(&[0xFF, 0xFE]) {
        Some(UTF_16LE)
    } else if bytes.starts_with(&[0xFE, 0xFF]) {
        Some(UTF_16BE)
    } else {
        None
    }
}

/// Decode bytes to a UTF-8 string using the given encoding.
///
/// Lossy: undecodable sequences become the Unicode replacement character
/// instead of an error. A leading BOM is not included in the output.
#[must_use]
pub fn decode_lossy(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}
