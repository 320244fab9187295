//! Job Posting Extractor.
//!
//! Derives a `(title, description)` pair from an arbitrary employer page
//! by trying strategies in strict priority order: structured metadata,
//! then heuristic DOM extraction, then the page-title fallback. Each
//! strategy either produces a draft or signals failure; the first draft
//! that survives validation wins and stamps its `ExtractionMethod`.
//! New site support is added by inserting a strategy, never by
//! special-casing call sites.

mod fallback;
mod heuristic;
mod structured;

use dom_query::Document;
use tracing::debug;

use crate::error::{Error, ExtractionReason, Result};
use crate::html;
use crate::options::Options;
use crate::result::{ExtractionMethod, JobPosting};

/// Candidate posting produced by a strategy, already normalized.
#[derive(Debug)]
pub(crate) struct Draft {
    pub title: String,
    pub description: String,
    pub company: Option<String>,
}

/// Extract a job posting from fetched HTML.
///
/// # Errors
///
/// Returns `Error::Extraction` with `NoStructuredData` when no strategy
/// finds even a title, or `PageTooSparse` when a title exists but no
/// description reaches `Options::min_description_len`.
pub fn extract_job(page_html: &str, url: Option<&str>, opts: &Options) -> Result<JobPosting> {
    let doc = Document::from(page_html);

    // Structured data first, before cleaning: pruning the DOM would
    // also prune the ld+json scripts.
    let mut drafts: Vec<(ExtractionMethod, Option<Draft>)> = Vec::with_capacity(3);
    drafts.push((ExtractionMethod::Structured, structured::attempt(&doc)));

    html::clean_document(&doc);
    drafts.push((ExtractionMethod::Heuristic, heuristic::attempt(&doc)));
    drafts.push((ExtractionMethod::Fallback, fallback::attempt(&doc)));

    let mut saw_title = false;
    for (method, draft) in drafts {
        let Some(draft) = draft else { continue };
        if !draft.title.is_empty() {
            saw_title = true;
        }
        if is_valid(&draft, opts) {
            debug!(?method, title = %draft.title, "extraction strategy succeeded");
            return Ok(JobPosting {
                title: draft.title,
                description: draft.description,
                company: draft.company,
                source_url: url.map(ToString::to_string),
                method,
            });
        }
    }

    if saw_title {
        Err(Error::Extraction {
            reason: ExtractionReason::PageTooSparse,
            detail: format!(
                "no description reached the minimum of {} characters",
                opts.min_description_len
            ),
        })
    } else {
        Err(Error::Extraction {
            reason: ExtractionReason::NoStructuredData,
            detail: "page carries no recognizable job posting content".to_string(),
        })
    }
}

/// A draft succeeds only with a non-empty title and a description long
/// enough to not be an error page or a login wall.
fn is_valid(draft: &Draft, opts: &Options) -> bool {
    !draft.title.is_empty() && draft.description.chars().count() >= opts.min_description_len
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

    use super::*;
    use crate::error::ExtractionReason;

    fn long_description(prefix: &str) -> String {
        format!(
            "{prefix} You will design, build and operate backend services in Rust, \
             collaborate with product engineers, review code, and own deployments \
             end to end. Experience with PostgreSQL and Kubernetes is expected."
        )
    }

    #[test]
    fn structured_data_wins_over_headings() {
        let html = format!(
            r#"<html><head>
            <script type="application/ld+json">
            {{"@type": "JobPosting", "title": "Backend Engineer",
              "description": "<p>{}</p>",
              "hiringOrganization": {{"@type": "Organization", "name": "Acme"}}}}
            </script>
            <title>Careers at Acme</title></head>
            <body><h1>Totally Different Heading</h1><p>{}</p></body></html>"#,
            long_description("Structured copy."),
            long_description("Body copy."),
        );
        let posting = extract_job(&html, Some("https://acme.example/jobs/1"), &Options::default())
            .expect("structured extraction");
        assert_eq!(posting.method, ExtractionMethod::Structured);
        assert_eq!(posting.title, "Backend Engineer");
        assert_eq!(posting.company.as_deref(), Some("Acme"));
        assert!(posting.description.starts_with("Structured copy."));
        assert_eq!(posting.source_url.as_deref(), Some("https://acme.example/jobs/1"));
    }

    #[test]
    fn heuristic_used_when_no_structured_data() {
        let html = format!(
            r#"<html><head><title>Acme Careers</title></head><body>
            <nav>Home | Jobs</nav>
            <h1>Platform Engineer</h1>
            <article><p>{}</p></article>
            </body></html>"#,
            long_description("We run a large Rust platform."),
        );
        let posting = extract_job(&html, None, &Options::default()).expect("heuristic extraction");
        assert_eq!(posting.method, ExtractionMethod::Heuristic);
        assert_eq!(posting.title, "Platform Engineer");
        assert!(posting.description.contains("Rust platform"));
        assert!(posting.source_url.is_none());
    }

    #[test]
    fn fallback_used_when_no_headings() {
        let html = format!(
            r#"<html><head><title>Data Engineer | Acme Corp</title></head>
            <body><p>{}</p></body></html>"#,
            long_description("Join the data team."),
        );
        let posting = extract_job(&html, None, &Options::default()).expect("fallback extraction");
        assert_eq!(posting.method, ExtractionMethod::Fallback);
        assert_eq!(posting.title, "Data Engineer");
        assert!(posting.description.contains("data team"));
    }

    #[test]
    fn sparse_page_with_title_is_page_too_sparse() {
        let html = r#"<html><head><title>Engineer | Acme</title></head>
            <body><h1>Engineer</h1><p>Apply now.</p></body></html>"#;
        let err = extract_job(html, None, &Options::default()).expect_err("must fail");
        assert!(matches!(
            err,
            Error::Extraction {
                reason: ExtractionReason::PageTooSparse,
                ..
            }
        ));
    }

    #[test]
    fn empty_page_is_no_structured_data() {
        let err = extract_job("<html><body></body></html>", None, &Options::default())
            .expect_err("must fail");
        assert!(matches!(
            err,
            Error::Extraction {
                reason: ExtractionReason::NoStructuredData,
                ..
            }
        ));
    }
}
