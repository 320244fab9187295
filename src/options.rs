//! Configuration options for extraction and scoring.
//!
//! The `Options` struct collects every tunable in one place: fetch
//! bounds, extraction validation thresholds, and the keyword/scoring
//! weights. The scoring weights are deliberately configuration rather
//! than constants baked into the algorithms.

use std::time::Duration;

/// Configuration options for job analysis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use jobfit::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_description_len: 80,
///     vocabulary_boost: 2.0,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    // === Fetching ===
    /// Maximum time to wait for a page fetch before aborting.
    ///
    /// Default: 10 seconds
    pub fetch_timeout: Duration,

    /// Maximum response body size in bytes.
    ///
    /// Responses larger than this abort with `FetchReason::TooLarge`,
    /// bounding memory use per request.
    ///
    /// Default: `3_000_000` (3 MB)
    pub max_response_bytes: usize,

    /// User-Agent header sent with page fetches.
    ///
    /// Job boards routinely reject default HTTP client agents, so a
    /// browser-like string is used.
    pub user_agent: String,

    // === Extraction validation ===
    /// Minimum normalized description length (characters) for an
    /// extraction strategy to count as successful.
    ///
    /// Guards against mistaking an error page or a login wall for a
    /// job posting.
    ///
    /// Default: `120`
    pub min_description_len: usize,

    // === Keyword extraction ===
    /// Weight of a term occurrence on an emphasized line (heading or
    /// bulleted item) instead of the base occurrence weight of 1.0.
    ///
    /// Default: `2.0`
    pub emphasis_weight: f64,

    /// Multiplier applied to the final weight of terms found in the
    /// skill vocabulary.
    ///
    /// Default: `1.5`
    pub vocabulary_boost: f64,

    /// Minimum weight for a non-vocabulary (generic) term to survive.
    ///
    /// Vocabulary terms are exempt: they are kept at any weight.
    ///
    /// Default: `2.0`
    pub min_keyword_weight: f64,

    // === Scoring / reporting ===
    /// Score threshold (inclusive) for the "strong match" band.
    ///
    /// Default: `75`
    pub strong_match_threshold: u8,

    /// Score threshold (inclusive) for the "moderate match" band.
    ///
    /// Default: `50`
    pub moderate_match_threshold: u8,

    /// Score threshold (inclusive) for the "weak match" band.
    ///
    /// Default: `25`
    pub weak_match_threshold: u8,

    /// How many top matched and top missing keywords get their own
    /// reason line.
    ///
    /// Default: `3`
    pub reason_keyword_count: usize,

    /// Cap on the matched/missing keyword lists in an `AnalysisResult`,
    /// keeping response payloads small.
    ///
    /// Default: `50`
    pub max_reported_keywords: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
            max_response_bytes: 3_000_000,
            user_agent: concat!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
                "(KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            )
            .to_string(),
            min_description_len: 120,
            emphasis_weight: 2.0,
            vocabulary_boost: 1.5,
            min_keyword_weight: 2.0,
            strong_match_threshold: 75,
            moderate_match_threshold: 50,
            weak_match_threshold: 25,
            reason_keyword_count: 3,
            max_reported_keywords: 50,
        }
    }
}
