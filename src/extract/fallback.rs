//! Fallback extraction strategy.
//!
//! Last resort, lowest confidence: the `<title>` element trimmed of its
//! site-name suffix becomes the title, and the full cleaned body text
//! becomes the description. Callers see `ExtractionMethod::Fallback` on
//! the result and can route it to manual review.

use dom_query::Document;

use super::Draft;
use crate::html;
use crate::normalize::normalize_whitespace;
use crate::patterns::TITLE_SEPARATOR;

/// Try to build a draft from the page title and body text.
pub(super) fn attempt(doc: &Document) -> Option<Draft> {
    let raw_title = normalize_whitespace(&doc.select("title").text());
    let title = strip_site_suffix(&raw_title);

    let body = doc.select("body");
    let description = if body.length() > 0 {
        html::element_text(&body)
    } else {
        String::new()
    };

    if title.is_empty() && description.is_empty() {
        return None;
    }
    Some(Draft {
        title,
        description,
        company: None,
    })
}

/// Drop a trailing site name from a page title.
///
/// Splits at the last separator (`|`, `-`, `–`, `—`, `·`, `»`, `:`) and
/// keeps the leading part when it is long enough to be a real title
/// (more than 3 characters), so "Go - Acme" keeps its suffix while
/// "Senior Engineer - Acme Careers" loses it.
pub(crate) fn strip_site_suffix(title: &str) -> String {
    if let Some(separator) = TITLE_SEPARATOR.find_iter(title).last() {
        let head = title[..separator.start()].trim();
        if head.chars().count() > 3 {
            return head.to_string();
        }
    }
    title.trim().to_string()
}
