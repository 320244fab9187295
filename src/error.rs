//! Error types for jobfit.
//!
//! This module defines the error taxonomy for document normalization,
//! page fetching, and job posting extraction. Fit scoring never errors;
//! it degrades to a zero score with an explanatory reason instead.

use std::fmt;

/// Why a page fetch failed.
///
/// Fetch failures are transient from the caller's point of view: the same
/// URL may succeed on retry (with backoff).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchReason {
    /// The request exceeded the configured timeout.
    Timeout,

    /// The server answered with a non-2xx status code.
    HttpStatus,

    /// DNS, TLS, connection, or invalid-URL failure.
    Network,

    /// The response body exceeded the configured byte cap.
    TooLarge,
}

impl fmt::Display for FetchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Timeout => "timeout",
            Self::HttpStatus => "http_status",
            Self::Network => "network",
            Self::TooLarge => "too_large",
        };
        f.write_str(s)
    }
}

/// Why a fetched page yielded no job posting.
///
/// Extraction failures are permanent: the page itself lacks usable
/// content, so retrying the same URL will not help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionReason {
    /// No strategy could find even a title on the page.
    NoStructuredData,

    /// A title was found but no description met the minimum length.
    PageTooSparse,
}

impl fmt::Display for ExtractionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NoStructuredData => "no_structured_data",
            Self::PageTooSparse => "page_too_sparse",
        };
        f.write_str(s)
    }
}

/// Error type for normalization, fetching, and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document kind is not recognized or the byte stream is empty.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The format parser could not produce any text from the document.
    ///
    /// Surfaced rather than swallowed to an empty string: empty text
    /// would otherwise be misread downstream as "no skills found".
    #[error("corrupt document: {0}")]
    CorruptDocument(String),

    /// The page could not be fetched. Transient; callers may retry.
    #[error("fetch failed ({reason}): {detail}")]
    Fetch {
        /// Failure classification.
        reason: FetchReason,
        /// Human-readable context.
        detail: String,
    },

    /// The page was fetched but no job posting could be extracted.
    #[error("extraction failed ({reason}): {detail}")]
    Extraction {
        /// Failure classification.
        reason: ExtractionReason,
        /// Human-readable context.
        detail: String,
    },

    /// A vocabulary file could not be parsed.
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(#[from] serde_json::Error),
}

/// Result type alias for jobfit operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_reason_display_matches_wire_names() {
        assert_eq!(FetchReason::Timeout.to_string(), "timeout");
        assert_eq!(FetchReason::HttpStatus.to_string(), "http_status");
        assert_eq!(FetchReason::Network.to_string(), "network");
        assert_eq!(FetchReason::TooLarge.to_string(), "too_large");
    }

    #[test]
    fn extraction_error_message_includes_reason() {
        let err = Error::Extraction {
            reason: ExtractionReason::PageTooSparse,
            detail: "description below minimum length".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("page_too_sparse"));
        assert!(msg.contains("minimum length"));
    }
}
