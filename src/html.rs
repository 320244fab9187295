//! HTML cleaning and block-aware text extraction.
//!
//! Shared between the normalizer (HTML resume/page input) and the job
//! posting extractor. Cleaning removes script/style and page chrome from
//! the DOM; text extraction then flattens markup to plain text while
//! keeping headings and list items on their own lines, so downstream
//! keyword extraction can weight them.

use dom_query::{Document, Selection};

use crate::normalize::normalize_whitespace;
use crate::patterns::{
    ANY_TAG, BLOCK_TAG, BOILERPLATE_CLASS, HEADING_OPEN, LI_OPEN, NUMERIC_ENTITY,
};

/// Elements that never contribute posting text.
const CLEANING_SELECTOR: &str = "script, style, noscript, iframe, svg, template, \
     nav, header, footer, aside, form, button, select, input, \
     div[class*=\"cookie\"], div[class*=\"consent\"], div[class*=\"gdpr\"], \
     div[class*=\"banner\"], div[class*=\"modal\"], div[class*=\"popup\"], \
     div[class*=\"newsletter\"], div[id*=\"footer\"], div[id*=\"header\"]";

/// Remove non-content elements from the document in place.
///
/// Two passes: a tag/attribute selector for the unambiguous cases, then a
/// class/id scan against the boilerplate pattern for themed page chrome
/// (share widgets, apply buttons, related-jobs rails).
pub fn clean_document(doc: &Document) {
    let unwanted = doc.select(CLEANING_SELECTOR).nodes().to_vec();
    for node in unwanted.into_iter().rev() {
        Selection::from(node).remove();
    }

    let attributed = doc.select("[class], [id]").nodes().to_vec();
    for node in attributed.into_iter().rev() {
        let sel = Selection::from(node);
        if is_boilerplate(&sel) {
            sel.remove();
        }
    }
}

/// Whether an element's class or id marks it as page furniture.
#[must_use]
pub fn is_boilerplate(sel: &Selection) -> bool {
    let class = sel.attr("class").unwrap_or_default();
    let id = sel.attr("id").unwrap_or_default();
    BOILERPLATE_CLASS.is_match(&class) || BOILERPLATE_CLASS.is_match(&id)
}

/// Flatten an HTML fragment to normalized plain text.
///
/// Headings get a leading newline, list items become `- ` lines, other
/// block boundaries become newlines, and remaining tags collapse to a
/// space. Entities are unescaped after tag stripping, so escaped markup
/// in text stays text.
#[must_use]
pub fn flatten_to_text(html: &str) -> String {
    let text = LI_OPEN.replace_all(html, "\n- ");
    let text = HEADING_OPEN.replace_all(&text, "\n");
    let text = BLOCK_TAG.replace_all(&text, "\n");
    let text = ANY_TAG.replace_all(&text, " ");
    normalize_whitespace(&unescape_entities(&text))
}

/// Normalized plain text of one element (including descendants).
#[must_use]
pub fn element_text(sel: &Selection) -> String {
    flatten_to_text(&sel.html())
}

/// Decode the HTML entities that occur in practice: the named basics
/// plus numeric character references.
#[must_use]
pub fn unescape_entities(text: &str) -> String {
    let text = NUMERIC_ENTITY.replace_all(text, |caps: &regex::Captures<'_>| {
        let code = caps
            .get(1)
            .map(|m| u32::from_str_radix(m.as_str(), 16))
            .or_else(|| caps.get(2).map(|m| m.as_str().parse::<u32>()))
            .and_then(std::result::Result::ok);
        code.and_then(char::from_u32)
            .map_or_else(String::new, String::from)
    });

    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
