//! Fit Scorer.
//!
//! Pure, deterministic scoring of one resume keyword set against one job
//! keyword set. Produces weighted coverage scaled to 0-100, the
//! matched/missing keyword lists, and templated human-readable reasons
//! ordered by significance. Never errors: a job with nothing to score
//! degrades to a zero score with an explanatory reason.

use crate::options::Options;
use crate::result::{AnalysisResult, Keyword, KeywordCategory, KeywordSet};

/// Score a resume keyword set against a job keyword set.
///
/// Matching is category-aware: a vocabulary-tagged job term only counts
/// when the resume term's category is compatible, so a coincidental
/// generic-word overlap cannot satisfy a skill requirement.
#[must_use]
pub fn score_fit(resume: &KeywordSet, job: &KeywordSet, opts: &Options) -> AnalysisResult {
    if job.is_empty() {
        return AnalysisResult {
            score: 0,
            reasons: vec![
                "The job description was too sparse to analyze: no significant keywords were found."
                    .to_string(),
            ],
            matched_keywords: Vec::new(),
            missing_keywords: Vec::new(),
        };
    }

    let mut matched: Vec<&Keyword> = Vec::new();
    let mut missing: Vec<&Keyword> = Vec::new();
    for job_kw in job {
        let is_match = resume
            .get(&job_kw.term)
            .is_some_and(|resume_kw| categories_compatible(job_kw.category, resume_kw.category));
        if is_match {
            matched.push(job_kw);
        } else if job_kw.category != KeywordCategory::Generic {
            // Generic terms carry no signal and are never reported missing
            missing.push(job_kw);
        }
    }

    let total_weight: f64 = job.iter().map(|k| k.weight).sum();
    let matched_weight: f64 = matched.iter().map(|k| k.weight).sum();
    let coverage = if total_weight > 0.0 {
        matched_weight / total_weight
    } else {
        0.0
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = (coverage * 100.0).round().clamp(0.0, 100.0) as u8;

    let reasons = build_reasons(score, &matched, &missing, job, opts);

    AnalysisResult {
        score,
        reasons,
        matched_keywords: reported_terms(&matched, opts),
        missing_keywords: reported_terms(&missing, opts),
    }
}

/// Whether a resume keyword of `resume_cat` satisfies a job keyword of
/// `job_cat`. Skill and Tool are interchangeable (vocabulary curation of
/// the boundary is fuzzy); Qualification is strict; a Generic job term
/// is satisfied by anything sharing its canonical form.
fn categories_compatible(job_cat: KeywordCategory, resume_cat: KeywordCategory) -> bool {
    use KeywordCategory::{Generic, Qualification, Skill, Tool};
    match job_cat {
        Generic => true,
        Qualification => resume_cat == Qualification,
        Skill | Tool => matches!(resume_cat, Skill | Tool),
    }
}

/// Assemble the reason list, most significant first: score banding, top
/// matched terms, top missing terms, then any job category with no
/// matches at all. One reason per fact, no duplicates.
fn build_reasons(
    score: u8,
    matched: &[&Keyword],
    missing: &[&Keyword],
    job: &KeywordSet,
    opts: &Options,
) -> Vec<String> {
    let mut reasons = Vec::new();

    let band = if score >= opts.strong_match_threshold {
        "Strong match"
    } else if score >= opts.moderate_match_threshold {
        "Moderate match"
    } else if score >= opts.weak_match_threshold {
        "Weak match"
    } else {
        "Poor match"
    };
    reasons.push(format!(
        "{band}: the resume covers {} of {} weighted job keywords.",
        matched.len(),
        job.len()
    ));

    // Keyword sets are weight-ordered already, so the first N are the top N
    for kw in matched.iter().take(opts.reason_keyword_count) {
        reasons.push(format!(
            "Resume demonstrates '{}', a significant job requirement.",
            kw.term
        ));
    }
    for kw in missing.iter().take(opts.reason_keyword_count) {
        reasons.push(format!(
            "The job calls for '{}', which the resume does not mention.",
            kw.term
        ));
    }

    for (category, label) in [
        (KeywordCategory::Skill, "skill"),
        (KeywordCategory::Tool, "tool"),
        (KeywordCategory::Qualification, "qualification"),
    ] {
        let in_job = job.iter().any(|k| k.category == category);
        let any_matched = matched.iter().any(|k| k.category == category);
        if in_job && !any_matched {
            reasons.push(format!(
                "None of the job's {label} requirements are reflected in the resume."
            ));
        }
    }

    reasons
}

/// Sorted, capped term list for the response payload.
fn reported_terms(keywords: &[&Keyword], opts: &Options) -> Vec<String> {
    let mut terms: Vec<String> = keywords.iter().map(|k| k.term.clone()).collect();
    terms.sort_unstable();
    terms.truncate(opts.max_reported_keywords);
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(term: &str, weight: f64, category: KeywordCategory) -> Keyword {
        Keyword {
            term: term.to_string(),
            weight,
            category,
        }
    }

    fn set(keywords: Vec<Keyword>) -> KeywordSet {
        KeywordSet::from_sorted(keywords)
    }

    #[test]
    fn empty_job_scores_zero_with_sparse_reason() {
        let resume = set(vec![kw("python", 3.0, KeywordCategory::Skill)]);
        let result = score_fit(&resume, &set(vec![]), &Options::default());
        assert_eq!(result.score, 0);
        assert!(result.reasons[0].contains("too sparse"));
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn identical_sets_score_one_hundred() {
        let keywords = vec![
            kw("python", 3.0, KeywordCategory::Skill),
            kw("docker", 1.5, KeywordCategory::Tool),
            kw("shipping", 2.0, KeywordCategory::Generic),
        ];
        let result = score_fit(&set(keywords.clone()), &set(keywords), &Options::default());
        assert_eq!(result.score, 100);
        assert!(result.missing_keywords.is_empty());
        assert!(result.reasons[0].starts_with("Strong match"));
    }

    #[test]
    fn weighted_coverage_drives_score() {
        let job = set(vec![
            kw("python", 1.5, KeywordCategory::Skill),
            kw("docker", 1.5, KeywordCategory::Tool),
            kw("aws", 1.5, KeywordCategory::Tool),
        ]);
        let resume = set(vec![
            kw("python", 3.0, KeywordCategory::Skill),
            kw("aws", 1.5, KeywordCategory::Tool),
        ]);
        let result = score_fit(&resume, &job, &Options::default());
        // 3.0 of 4.5 job weight matched
        assert_eq!(result.score, 67);
        assert_eq!(result.matched_keywords, vec!["aws", "python"]);
        assert_eq!(result.missing_keywords, vec!["docker"]);
    }

    #[test]
    fn generic_terms_never_reported_missing() {
        let job = set(vec![
            kw("python", 1.5, KeywordCategory::Skill),
            kw("collaboration", 2.0, KeywordCategory::Generic),
        ]);
        let resume = set(vec![kw("python", 1.5, KeywordCategory::Skill)]);
        let result = score_fit(&resume, &job, &Options::default());
        assert_eq!(result.missing_keywords, vec![] as Vec<String>);
    }

    #[test]
    fn generic_resume_term_cannot_satisfy_skill_requirement() {
        let job = set(vec![kw("go", 1.5, KeywordCategory::Skill)]);
        // The word "go" in prose, not the language
        let resume = set(vec![kw("go", 2.0, KeywordCategory::Generic)]);
        let result = score_fit(&resume, &job, &Options::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.missing_keywords, vec!["go"]);
    }

    #[test]
    fn skill_and_tool_categories_interchange() {
        let job = set(vec![kw("docker", 1.5, KeywordCategory::Skill)]);
        let resume = set(vec![kw("docker", 1.5, KeywordCategory::Tool)]);
        let result = score_fit(&resume, &job, &Options::default());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn unmatched_category_gets_a_reason() {
        let job = set(vec![
            kw("python", 1.5, KeywordCategory::Skill),
            kw("bachelor", 1.5, KeywordCategory::Qualification),
        ]);
        let resume = set(vec![kw("python", 1.5, KeywordCategory::Skill)]);
        let result = score_fit(&resume, &job, &Options::default());
        assert!(result
            .reasons
            .iter()
            .any(|r| r.contains("qualification requirements")));
    }

    #[test]
    fn reasons_have_no_duplicates() {
        let job = set(vec![
            kw("python", 3.0, KeywordCategory::Skill),
            kw("docker", 2.0, KeywordCategory::Tool),
            kw("terraform", 1.5, KeywordCategory::Tool),
            kw("bachelor", 1.0, KeywordCategory::Qualification),
        ]);
        let resume = set(vec![kw("python", 1.5, KeywordCategory::Skill)]);
        let result = score_fit(&resume, &job, &Options::default());
        let mut deduped = result.reasons.clone();
        deduped.dedup();
        assert_eq!(deduped, result.reasons);
    }

    #[test]
    fn adding_a_matched_job_keyword_never_decreases_score() {
        let resume = set(vec![
            kw("python", 1.5, KeywordCategory::Skill),
            kw("docker", 1.5, KeywordCategory::Tool),
        ]);
        let base_job = vec![
            kw("python", 1.5, KeywordCategory::Skill),
            kw("terraform", 1.5, KeywordCategory::Tool),
        ];
        let before = score_fit(&resume, &set(base_job.clone()), &Options::default());

        let mut extended = base_job;
        extended.push(kw("docker", 1.5, KeywordCategory::Tool));
        let after = score_fit(&resume, &set(extended), &Options::default());

        assert!(after.score >= before.score);
    }

    #[test]
    fn deterministic_across_calls() {
        let job = set(vec![
            kw("python", 1.5, KeywordCategory::Skill),
            kw("docker", 1.5, KeywordCategory::Tool),
        ]);
        let resume = set(vec![kw("python", 3.0, KeywordCategory::Skill)]);
        let first = score_fit(&resume, &job, &Options::default());
        let second = score_fit(&resume, &job, &Options::default());
        assert_eq!(first, second);
    }
}
