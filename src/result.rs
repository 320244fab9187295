//! Data model for extraction and scoring output.
//!
//! Defines the structured types flowing between the components: the
//! extracted job posting, the normalized resume document, keyword sets,
//! and the fit analysis result returned to callers.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Recognized resume/document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimeKind {
    /// PDF document.
    Pdf,
    /// Legacy binary Word document.
    Doc,
    /// Office Open XML Word document.
    Docx,
    /// Plain text.
    Text,
    /// HTML markup (used by the job posting extractor, not uploads).
    Html,
}

impl MimeKind {
    /// Map a file extension (without the dot, any case) to a kind.
    ///
    /// Returns `None` for unrecognized extensions; the caller decides
    /// whether to reject the upload or attempt a plain-text read.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            "txt" | "text" | "md" => Some(Self::Text),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

/// Which extraction strategy produced a job posting.
///
/// Ordered by confidence: `Structured` results come from machine-readable
/// metadata, `Fallback` results only from the page title and body text.
/// Callers can flag `Fallback` postings for manual review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    /// Schema.org JobPosting metadata embedded in the page.
    Structured,
    /// Heading plus largest content block.
    Heuristic,
    /// Page title plus full body text. Lowest confidence.
    Fallback,
    /// Entered directly by the user, not extracted from a page.
    Manual,
}

/// A job posting with normalized text content.
///
/// Immutable once created; persistence belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Position title. Never empty.
    pub title: String,

    /// Normalized plain-text description. Never empty.
    pub description: String,

    /// Hiring organization, when structured metadata names one.
    pub company: Option<String>,

    /// URL the posting was extracted from; `None` for manual entries.
    pub source_url: Option<String>,

    /// Strategy that produced this posting.
    pub method: ExtractionMethod,
}

impl JobPosting {
    /// Build a posting from user-entered fields (the manual-entry path).
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedFormat` if either field is empty after
    /// trimming, mirroring the invariants the extractor enforces.
    pub fn manual(title: &str, description: &str) -> Result<Self> {
        let title = crate::normalize::normalize_whitespace(title);
        let description = crate::normalize::normalize_whitespace(description);
        if title.is_empty() {
            return Err(Error::UnsupportedFormat("empty job title".to_string()));
        }
        if description.is_empty() {
            return Err(Error::UnsupportedFormat(
                "empty job description".to_string(),
            ));
        }
        Ok(Self {
            title,
            description,
            company: None,
            source_url: None,
            method: ExtractionMethod::Manual,
        })
    }
}

/// An uploaded resume with its derived plain text.
///
/// `normalized_text` is computed deterministically from `raw_bytes` and
/// `mime_kind` at construction and never hand-edited afterwards.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    /// Original upload, byte for byte.
    pub raw_bytes: Vec<u8>,

    /// Declared document format.
    pub mime_kind: MimeKind,

    /// Normalized plain text derived from the bytes.
    pub normalized_text: String,
}

impl ResumeDocument {
    /// Normalize `bytes` according to `kind` and wrap the result.
    ///
    /// # Errors
    ///
    /// Propagates `UnsupportedFormat`/`CorruptDocument` from the
    /// normalizer; a resume that yields no text is an error, never an
    /// empty document.
    pub fn from_bytes(bytes: Vec<u8>, kind: MimeKind) -> Result<Self> {
        let normalized_text = crate::normalize::normalize(&bytes, kind)?;
        Ok(Self {
            raw_bytes: bytes,
            mime_kind: kind,
            normalized_text,
        })
    }
}

/// Category of an extracted keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    /// Programming language, framework, methodology.
    Skill,
    /// Platform, product, or piece of infrastructure.
    Tool,
    /// Degree, certification, seniority marker.
    Qualification,
    /// Not in the reference vocabulary.
    Generic,
}

/// One significant term extracted from a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Canonical term: lowercase, alias- and plural-folded.
    pub term: String,

    /// Accumulated weight across all occurrences. Always >= 0.
    pub weight: f64,

    /// Vocabulary category, or `Generic` for unknown terms.
    pub category: KeywordCategory,
}

/// Ordered, term-unique sequence of keywords.
///
/// Sorted by descending weight, ties broken by first occurrence in the
/// source text, so identical input always yields an identical set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    /// Wrap an already ordered, already deduplicated keyword list.
    #[must_use]
    pub(crate) fn from_sorted(keywords: Vec<Keyword>) -> Self {
        Self { keywords }
    }

    /// Keywords in ranked order.
    #[must_use]
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Look up a keyword by canonical term.
    #[must_use]
    pub fn get(&self, term: &str) -> Option<&Keyword> {
        self.keywords.iter().find(|k| k.term == term)
    }

    /// Whether the set contains a canonical term.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.get(term).is_some()
    }

    /// Number of keywords in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterate over keywords in ranked order.
    pub fn iter(&self) -> std::slice::Iter<'_, Keyword> {
        self.keywords.iter()
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a Keyword;
    type IntoIter = std::slice::Iter<'a, Keyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.keywords.iter()
    }
}

/// Result of scoring one resume against one job posting.
///
/// A pure function's output: holds no reference to either input and is
/// recomputed fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Compatibility score, 0 to 100.
    pub score: u8,

    /// Human-readable justifications, most significant first.
    pub reasons: Vec<String>,

    /// Job keywords also present in the resume. Sorted, capped.
    pub matched_keywords: Vec<String>,

    /// Skill/tool/qualification job keywords absent from the resume.
    /// Sorted, capped. Generic terms are never reported here.
    pub missing_keywords: Vec<String>,
}
