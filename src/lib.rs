//! # jobfit
//!
//! Document intelligence for job-application tracking: extracts a
//! structured job posting (title + description) from an arbitrary
//! employer URL, and scores how well a resume matches a job
//! description, producing a 0-100 score, matched/missing keyword sets,
//! and human-readable justifications.
//!
//! The surrounding product concerns (storage, authentication, upload
//! plumbing, UI) are out of scope; this crate is the pure analysis
//! core they call into.
//!
//! ## Scoring a resume against a job
//!
//! ```rust
//! use jobfit::{analyze_fit, Options};
//!
//! let resume = "5 years Python and AWS developer";
//! let job = "Requires Python, Docker, and AWS experience. 5+ years preferred.";
//!
//! let result = analyze_fit(resume, job, &Options::default());
//! assert!(result.matched_keywords.contains(&"python".to_string()));
//! assert!(result.missing_keywords.contains(&"docker".to_string()));
//! ```
//!
//! ## Extracting a posting from a URL
//!
//! ```rust,no_run
//! use jobfit::{analyze_job, Options};
//!
//! # async fn run() -> jobfit::Result<()> {
//! let posting = analyze_job("https://example.com/jobs/42", &Options::default()).await?;
//! println!("{}: {}", posting.title, posting.description);
//! # Ok(())
//! # }
//! ```
//!
//! Extraction tries strategies in fixed priority order (structured
//! metadata, heuristic DOM extraction, page-title fallback) and records
//! which one succeeded, so low-confidence results can be flagged for
//! review. All scoring is pure and deterministic; the page fetch is the
//! only I/O, bounded by a timeout and a byte cap, and cancelled by
//! dropping the future.

mod error;
mod extract;
mod fetch;
mod html;
mod keywords;
mod normalize;
mod options;
mod patterns;
mod result;
mod score;
mod vocabulary;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, ExtractionReason, FetchReason, Result};
pub use extract::extract_job;
pub use fetch::fetch_page;
pub use keywords::{extract_keywords, extract_keywords_with};
pub use normalize::{normalize, normalize_whitespace};
pub use options::Options;
pub use result::{
    AnalysisResult, ExtractionMethod, JobPosting, Keyword, KeywordCategory, KeywordSet, MimeKind,
    ResumeDocument,
};
pub use score::score_fit;
pub use vocabulary::SkillVocabulary;

/// Fetch a URL and extract the job posting it describes.
///
/// Sequences the bounded fetch and the strategy chain, returning a
/// `JobPosting` stamped with the strategy that produced it.
///
/// # Errors
///
/// Returns `Error::Fetch` when the page cannot be retrieved (transient;
/// retry with backoff) and `Error::Extraction` when the page holds no
/// usable posting (permanent; do not retry).
pub async fn analyze_job(url: &str, options: &Options) -> Result<JobPosting> {
    let page = fetch::fetch_page(url, options).await?;
    extract::extract_job(&page, Some(url), options)
}

/// Score a resume text against a job description text.
///
/// Uses the built-in skill vocabulary. Pure and deterministic: identical
/// inputs always produce an identical result, and sparse inputs degrade
/// to a zero score with an explanatory reason instead of an error.
#[must_use]
pub fn analyze_fit(resume_text: &str, job_text: &str, options: &Options) -> AnalysisResult {
    analyze_fit_with_vocabulary(resume_text, job_text, &SkillVocabulary::builtin(), options)
}

/// Score a resume text against a job description text with a
/// caller-supplied vocabulary.
#[must_use]
pub fn analyze_fit_with_vocabulary(
    resume_text: &str,
    job_text: &str,
    vocabulary: &SkillVocabulary,
    options: &Options,
) -> AnalysisResult {
    // Normalization is idempotent, so already-normalized text passes
    // through unchanged
    let resume_text = normalize::normalize_whitespace(resume_text);
    let job_text = normalize::normalize_whitespace(job_text);

    let resume_keywords = keywords::extract_keywords_with(&resume_text, vocabulary, options);
    let job_keywords = keywords::extract_keywords_with(&job_text, vocabulary, options);

    score::score_fit(&resume_keywords, &job_keywords, options)
}
