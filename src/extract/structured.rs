//! Structured-data extraction strategy.
//!
//! Reads schema.org JobPosting metadata embedded in
//! `application/ld+json` scripts. Highest-confidence strategy: the
//! publisher declared these fields machine-readable on purpose. Handles
//! the shapes seen in the wild: a bare object, a top-level array, and
//! objects nested under `@graph`.

use dom_query::{Document, Selection};
use serde_json::Value;

use super::Draft;
use crate::html;
use crate::normalize::normalize_whitespace;

/// Try to build a draft from JSON-LD job posting metadata.
pub(super) fn attempt(doc: &Document) -> Option<Draft> {
    for script in doc.select(r#"script[type="application/ld+json"]"#).nodes() {
        let raw = Selection::from(*script).text();
        let Ok(value) = serde_json::from_str::<Value>(raw.trim()) else {
            // Malformed JSON-LD is common; skip and keep looking
            continue;
        };
        if let Some(draft) = find_job_posting(&value) {
            return Some(draft);
        }
    }
    None
}

/// Walk a JSON-LD value looking for a JobPosting object.
fn find_job_posting(value: &Value) -> Option<Draft> {
    match value {
        Value::Array(items) => items.iter().find_map(find_job_posting),
        Value::Object(map) => {
            if type_matches(map.get("@type")) {
                build_draft(map)
            } else {
                map.get("@graph").and_then(find_job_posting)
            }
        }
        _ => None,
    }
}

/// `@type` may be a string or an array of strings.
fn type_matches(type_field: Option<&Value>) -> bool {
    match type_field {
        Some(Value::String(s)) => s.eq_ignore_ascii_case("JobPosting"),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .any(|s| s.eq_ignore_ascii_case("JobPosting")),
        _ => false,
    }
}

fn build_draft(map: &serde_json::Map<String, Value>) -> Option<Draft> {
    let title = string_field(map, "title")
        .or_else(|| string_field(map, "name"))
        .map(|t| normalize_whitespace(&t))?;

    // Descriptions are frequently rich text; flatten the markup
    let description = string_field(map, "description")
        .map(|d| html::flatten_to_text(&d))
        .unwrap_or_default();

    Some(Draft {
        title,
        description,
        company: hiring_organization(map),
    })
}

/// `hiringOrganization` is either an Organization object or a bare name.
fn hiring_organization(map: &serde_json::Map<String, Value>) -> Option<String> {
    let org = map.get("hiringOrganization")?;
    let name = match org {
        Value::String(s) => s.clone(),
        Value::Object(fields) => fields.get("name")?.as_str()?.to_string(),
        _ => return None,
    };
    let name = normalize_whitespace(&name);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn string_field(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

    use super::*;

    fn doc_with_script(json: &str) -> Document {
        Document::from(format!(
            r#"<html><head><script type="application/ld+json">{json}</script></head><body></body></html>"#
        ))
    }

    #[test]
    fn reads_bare_job_posting_object() {
        let doc = doc_with_script(
            r#"{"@context": "https://schema.org", "@type": "JobPosting",
                "title": "Site Reliability Engineer",
                "description": "<p>Keep the lights on.</p>",
                "hiringOrganization": {"@type": "Organization", "name": "Acme"}}"#,
        );
        let draft = attempt(&doc).expect("job posting found");
        assert_eq!(draft.title, "Site Reliability Engineer");
        assert_eq!(draft.description, "Keep the lights on.");
        assert_eq!(draft.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn finds_posting_inside_graph() {
        let doc = doc_with_script(
            r#"{"@graph": [
                {"@type": "WebSite", "name": "Acme Careers"},
                {"@type": "JobPosting", "name": "Data Analyst",
                 "description": "Crunch numbers."}
            ]}"#,
        );
        let draft = attempt(&doc).expect("job posting found");
        assert_eq!(draft.title, "Data Analyst");
        assert_eq!(draft.description, "Crunch numbers.");
        assert!(draft.company.is_none());
    }

    #[test]
    fn type_arrays_match() {
        let doc = doc_with_script(
            r#"{"@type": ["Thing", "JobPosting"], "title": "QA Engineer",
                "description": "Test everything."}"#,
        );
        assert!(attempt(&doc).is_some());
    }

    #[test]
    fn non_posting_schema_ignored() {
        let doc = doc_with_script(
            r#"{"@type": "Article", "headline": "Why we hire", "description": "A blog post."}"#,
        );
        assert!(attempt(&doc).is_none());
    }

    #[test]
    fn malformed_json_ld_skipped() {
        let doc = doc_with_script("{not valid json");
        assert!(attempt(&doc).is_none());
    }

    #[test]
    fn posting_without_title_rejected() {
        let doc = doc_with_script(r#"{"@type": "JobPosting", "description": "No title here."}"#);
        assert!(attempt(&doc).is_none());
    }
}
