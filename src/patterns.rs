//! Compiled regex patterns and word tables.
//!
//! All patterns are compiled once at first use via `LazyLock`. The
//! stopword and boilerplate tables live here too so every component
//! filters noise the same way.

#![allow(clippy::expect_used)]

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Tokenization
// =============================================================================

/// Matches a candidate term in case-folded text. Keeps the characters
/// that occur inside real skill names ("c++", "c#", "node.js", "ci-cd").
pub static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z][a-z0-9_+.#-]*").expect("TOKEN regex"));

/// Matches a line that starts with a bullet marker.
pub static BULLET_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*•▪◦‣]|\d+[.)])\s+").expect("BULLET_LINE regex"));

// =============================================================================
// Title cleaning
// =============================================================================

/// Matches separators commonly placed between a page title and the site
/// name ("Senior Engineer | Acme Careers").
pub static TITLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[|\-–—·»:]\s+").expect("TITLE_SEPARATOR regex"));

// =============================================================================
// HTML to text
// =============================================================================

/// Opening list-item tags; rendered as bulleted lines.
pub static LI_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<li(?:\s[^>]*)?>").expect("LI_OPEN regex"));

/// Opening heading tags; rendered with a leading newline so headings
/// survive as standalone lines for emphasis weighting.
pub static HEADING_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h[1-6](?:\s[^>]*)?>").expect("HEADING_OPEN regex"));

/// Remaining block-level tag boundaries; each becomes a newline.
pub static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)</?(?:p|div|br|ul|ol|tr|table|thead|tbody|section|article|main|aside|blockquote|pre|dl|dt|dd|figure|fieldset)(?:\s[^>]*)?/?>|</(?:h[1-6]|li|td|th)>",
    )
    .expect("BLOCK_TAG regex")
});

/// Any leftover markup tag.
pub static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("ANY_TAG regex"));

/// Numeric character references, decimal or hex.
pub static NUMERIC_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(?:x([0-9a-fA-F]{1,6})|([0-9]{1,7}));").expect("NUMERIC_ENTITY regex"));

// =============================================================================
// Boilerplate detection
// =============================================================================

/// Matches class/id names of blocks that are never posting content:
/// navigation chrome, cookie/consent notices, share widgets, apply
/// buttons, and similar page furniture.
pub static BOILERPLATE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\bnav\b|navbar|navigation|breadcrumb|\bmenu\b|site[-_]?header|site[-_]?footer|\bfooter\b|cookie|consent|gdpr|\bbanner\b|\bmodal\b|popup|newsletter|subscribe|sidebar|related|recommend|share|social|\blogin\b|sign[-_]?in|sign[-_]?up|apply[-_]?(?:now|btn|button)|job[-_]?alert|similar[-_]?jobs)",
    )
    .expect("BOILERPLATE_CLASS regex")
});

/// Stopwords never emitted as keywords.
///
/// Seeded from the short common-word list the original scorer used,
/// extended with the function words that dominate job-ad prose.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "and", "of", "to", "a", "in", "for", "on", "with", "at", "by", "an", "be", "as",
        "is", "are", "that", "this", "from", "or", "it", "you", "your", "our", "we", "will",
        "have", "has", "i", "he", "she", "they", "them", "their", "his", "her", "was", "were",
        "been", "being", "do", "does", "did", "not", "no", "yes", "but", "if", "then", "than",
        "so", "such", "about", "into", "over", "under", "per", "via", "etc", "all", "any",
        "each", "both", "more", "most", "other", "some", "who", "whom", "what", "which",
        "when", "where", "how", "why", "can", "could", "should", "would", "may", "might",
        "must", "shall", "us", "its", "also", "within", "across", "including", "able",
        "well", "plus", "using", "use", "new", "one", "two", "three", "least", "e.g", "i.e",
    ]
    .into_iter()
    .collect()
});

/// Single terms that are job-ad furniture, not signal. A heading like
/// "Requirements" would otherwise become a high-weight keyword on every
/// posting.
pub static BOILERPLATE_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "responsibilities",
        "requirements",
        "requirement",
        "qualifications",
        "qualification",
        "benefits",
        "apply",
        "application",
        "applicants",
        "candidate",
        "candidates",
        "position",
        "role",
        "job",
        "jobs",
        "company",
        "team",
        "opportunity",
        "opportunities",
        "employer",
        "employment",
        "salary",
        "compensation",
        "description",
        "overview",
        "duties",
        "preferred",
        "required",
        "location",
        "work",
        "working",
        "years",
        "year",
    ]
    .into_iter()
    .collect()
});

/// Multiword phrases that are job-ad furniture. Checked against
/// canonicalized phrase candidates; these never become keywords
/// regardless of frequency.
pub static BOILERPLATE_PHRASES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "equal opportunity employer",
        "equal opportunity",
        "responsibilities include",
        "apply now",
        "apply today",
        "cover letter",
        "click here",
        "about us",
        "about the role",
        "about the company",
        "join our team",
        "we offer",
        "what you",
        "who you",
        "years of experience",
        "full time",
        "part time",
        "competitive salary",
        "benefits package",
        "job description",
        "job posting",
        "successful candidate",
        "ideal candidate",
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_matches_skill_spellings() {
        let text = "expert in c++, c#, node.js and ci-cd pipelines";
        let tokens: Vec<&str> = TOKEN.find_iter(text).map(|m| m.as_str()).collect();
        assert!(tokens.contains(&"c++"));
        assert!(tokens.contains(&"c#"));
        assert!(tokens.contains(&"node.js"));
        assert!(tokens.contains(&"ci-cd"));
    }

    #[test]
    fn bullet_line_matches_markers() {
        assert!(BULLET_LINE.is_match("- Python experience"));
        assert!(BULLET_LINE.is_match("  • Docker"));
        assert!(BULLET_LINE.is_match("1. Lead the team"));
        assert!(!BULLET_LINE.is_match("Python experience"));
    }

    #[test]
    fn title_separator_matches_common_forms() {
        assert!(TITLE_SEPARATOR.is_match("Engineer | Acme"));
        assert!(TITLE_SEPARATOR.is_match("Engineer - Acme"));
        assert!(TITLE_SEPARATOR.is_match("Engineer – Acme"));
        assert!(!TITLE_SEPARATOR.is_match("state-of-the-art"));
    }

    #[test]
    fn boilerplate_class_matches_chrome() {
        assert!(BOILERPLATE_CLASS.is_match("cookie-banner"));
        assert!(BOILERPLATE_CLASS.is_match("main-nav"));
        assert!(BOILERPLATE_CLASS.is_match("apply-now-btn"));
        assert!(BOILERPLATE_CLASS.is_match("similar-jobs"));
        assert!(!BOILERPLATE_CLASS.is_match("job-details"));
    }

    #[test]
    fn stopword_tables_are_disjoint_from_skills() {
        assert!(STOPWORDS.contains("the"));
        assert!(BOILERPLATE_TERMS.contains("requirements"));
        assert!(BOILERPLATE_PHRASES.contains("equal opportunity employer"));
        assert!(!STOPWORDS.contains("python"));
        assert!(!BOILERPLATE_TERMS.contains("python"));
    }
}
