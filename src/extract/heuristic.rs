//! Heuristic extraction strategy.
//!
//! For pages without structured metadata: the highest-ranking heading
//! becomes the title, and the tightest DOM container holding the bulk
//! of the remaining text becomes the description. Runs on a document
//! that has already been cleaned of navigation and boilerplate.

use dom_query::{Document, Selection};

use super::Draft;
use crate::html;

/// Candidate containers for the posting body.
const CONTENT_SELECTOR: &str = "article, main, section, div";

/// A child container holding at least this share of the best candidate's
/// text replaces it; prefers the tightest block over a page-level wrapper.
const TIGHTNESS_RATIO: f64 = 0.8;

/// Try to build a draft from headings and content blocks.
///
/// Returns `None` only when the page has no headings at all; a heading
/// without a usable description still yields a draft (with an empty
/// description) so the caller can distinguish "sparse" from "empty".
pub(super) fn attempt(doc: &Document) -> Option<Draft> {
    let title = best_heading(doc)?;
    let description = best_content_block(doc).unwrap_or_default();
    Some(Draft {
        title,
        description,
        company: None,
    })
}

/// The largest heading-level element: h1 outranks h2 and so on; among
/// headings of the winning rank, the one with the most text.
fn best_heading(doc: &Document) -> Option<String> {
    for level in 1..=6u8 {
        let headings = doc.select(&format!("h{level}"));
        let best = headings
            .nodes()
            .iter()
            .map(|node| html::element_text(&Selection::from(*node)))
            .filter(|text| !text.is_empty())
            .max_by_key(|text| text.chars().count());
        if let Some(text) = best {
            // Headings flatten to a single line
            return Some(text.replace('\n', " "));
        }
    }
    None
}

/// The content block carrying the posting body: the candidate with the
/// most text wins, but any nested candidate retaining `TIGHTNESS_RATIO`
/// of that text is preferred, walking inward until no child qualifies.
fn best_content_block(doc: &Document) -> Option<String> {
    let candidates = doc.select(CONTENT_SELECTOR);
    let texts: Vec<String> = candidates
        .nodes()
        .iter()
        .map(|node| {
            let sel = Selection::from(*node);
            if html::is_boilerplate(&sel) {
                String::new()
            } else {
                html::element_text(&sel)
            }
        })
        .collect();

    let max_len = texts.iter().map(|t| t.len()).max()?;
    if max_len == 0 {
        return None;
    }

    // Candidates appear in document order, parents before children;
    // the last one above the threshold is the innermost
    let threshold = (max_len as f64 * TIGHTNESS_RATIO) as usize;
    texts
        .into_iter()
        .filter(|t| t.len() >= threshold.max(1))
        .next_back()
}
