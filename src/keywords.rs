//! Keyword/Skill Extractor.
//!
//! Turns normalized text into a ranked, deduplicated set of significant
//! terms. Candidates are single tokens and short in-line phrases;
//! stopwords and job-ad boilerplate never survive. Terms found in the
//! skill vocabulary are boosted, categorized, and kept at any frequency;
//! everything else is `Generic` and must earn its weight.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::options::Options;
use crate::patterns::{BOILERPLATE_PHRASES, BOILERPLATE_TERMS, BULLET_LINE, STOPWORDS, TOKEN};
use crate::result::{Keyword, KeywordCategory, KeywordSet};
use crate::vocabulary::SkillVocabulary;

/// Longest phrase candidate, in tokens.
const MAX_PHRASE_LEN: usize = 3;

/// Running tally for one canonical term.
#[derive(Debug)]
struct Tally {
    weight: f64,
    first_pos: usize,
}

/// Extract keywords using the built-in vocabulary and default options.
#[must_use]
pub fn extract_keywords(text: &str) -> KeywordSet {
    extract_keywords_with(text, &SkillVocabulary::builtin(), &Options::default())
}

/// Extract keywords with a caller-supplied vocabulary and options.
///
/// Output is sorted by descending weight, ties broken by first
/// occurrence, so identical input always yields identical output.
#[must_use]
pub fn extract_keywords_with(
    text: &str,
    vocab: &SkillVocabulary,
    opts: &Options,
) -> KeywordSet {
    let mut tallies: HashMap<String, Tally> = HashMap::new();
    let mut position = 0usize;

    for line in text.lines() {
        let occurrence_weight = if is_emphasized(line) {
            opts.emphasis_weight
        } else {
            1.0
        };

        let lowered = line.to_lowercase();
        let tokens: Vec<&str> = TOKEN
            .find_iter(&lowered)
            .map(|m| m.as_str().trim_matches(['.', '-', '_']))
            .filter(|t| !t.is_empty())
            .collect();

        for (i, &token) in tokens.iter().enumerate() {
            let pos = position + i;

            // Single-token candidate
            if is_candidate_token(token, vocab) {
                record(&mut tallies, canonicalize(token, vocab), occurrence_weight, pos);
            }

            // Phrase candidates starting at this token. Arbitrary word
            // windows are noise, so only phrases the vocabulary (or its
            // alias table) recognizes are recorded.
            for len in 2..=MAX_PHRASE_LEN {
                if i + len > tokens.len() {
                    break;
                }
                let window = &tokens[i..i + len];
                if !is_candidate_phrase(window) {
                    continue;
                }
                let canonical = canonicalize(&window.join(" "), vocab);
                if BOILERPLATE_PHRASES.contains(canonical.as_str())
                    || !vocab.contains(&canonical)
                {
                    continue;
                }
                record(&mut tallies, canonical, occurrence_weight, pos);
            }
        }
        position += tokens.len();
    }

    fold_plurals(&mut tallies, vocab);

    let mut keywords: Vec<(Keyword, usize)> = tallies
        .into_iter()
        .filter_map(|(term, tally)| {
            let (weight, category) = match vocab.category_of(&term) {
                Some(category) => (tally.weight * opts.vocabulary_boost, category),
                None => {
                    if tally.weight < opts.min_keyword_weight {
                        return None;
                    }
                    (tally.weight, KeywordCategory::Generic)
                }
            };
            Some((
                Keyword {
                    term,
                    weight,
                    category,
                },
                tally.first_pos,
            ))
        })
        .collect();

    keywords.sort_by(|(a, a_pos), (b, b_pos)| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(Ordering::Equal)
            .then(a_pos.cmp(b_pos))
    });

    KeywordSet::from_sorted(keywords.into_iter().map(|(k, _)| k).collect())
}

/// A line whose terms deserve extra weight: bulleted items and short
/// heading-like labels (headings survive normalization as their own
/// lines without sentence punctuation).
fn is_emphasized(line: &str) -> bool {
    if BULLET_LINE.is_match(line) {
        return true;
    }
    let trimmed = line.trim();
    trimmed.chars().count() <= 60
        && trimmed.split_whitespace().count() <= 8
        && !trimmed.ends_with(['.', '!', '?', ';'])
}

fn is_candidate_token(token: &str, vocab: &SkillVocabulary) -> bool {
    if STOPWORDS.contains(token) || BOILERPLATE_TERMS.contains(token) {
        return false;
    }
    // Single letters are noise unless the vocabulary knows them ("r", "c")
    token.chars().count() >= 2 || vocab.contains(token)
}

fn is_candidate_phrase(window: &[&str]) -> bool {
    window
        .iter()
        .all(|t| !STOPWORDS.contains(t) && !BOILERPLATE_TERMS.contains(t))
}

/// Fold a surface form onto its canonical term: lowercase is already
/// done by tokenization; aliases map abbreviations onto full forms.
fn canonicalize(term: &str, vocab: &SkillVocabulary) -> String {
    vocab
        .resolve_alias(term)
        .map_or_else(|| term.to_string(), ToString::to_string)
}

fn record(tallies: &mut HashMap<String, Tally>, canonical: String, weight: f64, pos: usize) {
    tallies
        .entry(canonical)
        .and_modify(|t| {
            t.weight += weight;
            t.first_pos = t.first_pos.min(pos);
        })
        .or_insert(Tally {
            weight,
            first_pos: pos,
        });
}

/// Merge simple plurals into their singular when that is safe.
///
/// A term is only folded when the singular is a vocabulary term or
/// itself occurs in the document, and the surface form is not a
/// vocabulary term in its own right (protects "aws", "kubernetes").
fn fold_plurals(tallies: &mut HashMap<String, Tally>, vocab: &SkillVocabulary) {
    let candidates: Vec<String> = tallies
        .keys()
        .filter(|t| t.len() > 3 && t.ends_with('s') && !t.ends_with("ss") && !vocab.contains(t))
        .cloned()
        .collect();

    for plural in candidates {
        let singular = singular_form(&plural);
        if singular == plural {
            continue;
        }
        if vocab.contains(&singular) || tallies.contains_key(&singular) {
            if let Some(removed) = tallies.remove(&plural) {
                record(tallies, singular, removed.weight, removed.first_pos);
            }
        }
    }
}

fn singular_form(term: &str) -> String {
    if let Some(stem) = term.strip_suffix("ies") {
        format!("{stem}y")
    } else {
        term.strip_suffix('s').unwrap_or(term).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_stopword_or_boilerplate_ever_surfaces() {
        let text = "The team will have responsibilities. Requirements\nEqual opportunity employer. Python and the best tools.";
        let set = extract_keywords(text);
        for kw in &set {
            assert!(!STOPWORDS.contains(kw.term.as_str()), "stopword {}", kw.term);
            assert!(
                !BOILERPLATE_TERMS.contains(kw.term.as_str()),
                "boilerplate {}",
                kw.term
            );
            assert!(!BOILERPLATE_PHRASES.contains(kw.term.as_str()));
        }
    }

    #[test]
    fn vocabulary_terms_survive_single_occurrence() {
        let set = extract_keywords("We mostly use Python here.");
        assert!(set.contains("python"));
        // "mostly" is generic and appears once, below the default threshold
        assert!(!set.contains("mostly"));
    }

    #[test]
    fn aliases_fold_to_canonical_terms() {
        let set = extract_keywords("Strong JS and k8s background. JavaScript daily.");
        let js = set.get("javascript").map(|k| k.weight).unwrap_or_default();
        assert!(js > 0.0);
        assert!(set.contains("kubernetes"));
        assert!(!set.contains("js"));
        assert!(!set.contains("k8s"));
    }

    #[test]
    fn emphasized_lines_outweigh_prose() {
        let text = "- Docker\nWe sometimes mention docker infrastructure in passing prose sentences.";
        let set = extract_keywords(text);
        let docker = set.get("docker").map(|k| k.weight).unwrap_or_default();
        // one bullet occurrence (2.0) + one prose occurrence (1.0), boosted
        assert!((docker - 4.5).abs() < 1e-9, "weight was {docker}");
    }

    #[test]
    fn vocabulary_phrases_extracted() {
        let set = extract_keywords("Experience with machine learning required.\nMachine learning projects a plus.");
        assert!(set.contains("machine learning"));
    }

    #[test]
    fn plural_folds_only_when_safe() {
        let set = extract_keywords("We ship containers weekly. Each container is scanned. Kubernetes for aws workloads.");
        assert!(set.contains("container"));
        assert!(!set.contains("containers"));
        // vocabulary terms ending in s are never stripped
        assert!(set.contains("kubernetes"));
        assert!(set.contains("aws"));
    }

    #[test]
    fn ordering_is_deterministic_and_weight_ranked() {
        let text = "python python python docker docker aws";
        let a = extract_keywords(text);
        let b = extract_keywords(text);
        assert_eq!(a, b);
        let terms: Vec<&str> = a.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["python", "docker", "aws"]);
    }

    #[test]
    fn ties_break_by_first_occurrence() {
        let set = extract_keywords("rust go\nrust go");
        let terms: Vec<&str> = set.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["rust", "go"]);
    }

    #[test]
    fn empty_text_gives_empty_set() {
        assert!(extract_keywords("").is_empty());
    }
}
