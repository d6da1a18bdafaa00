//! Free-text medication normalization.
//!
//! Turns an unstructured medication list (one or more lines, Hebrew brand
//! names and typos included) into resolved canonical drug names. Unmatched
//! tokens are silently dropped from the resolved set; a caller that wants
//! to surface them must diff the input tokens against the result itself.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lexicon::Lexicon;
use crate::similarity::similarity;

/// Acceptance threshold for resolving a free-text token to a drug.
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// Looser threshold used by the interactive did-you-mean search.
pub const SEARCH_THRESHOLD: f64 = 0.75;

/// Tokens shorter than this are never fuzzy-matched.
const MIN_TOKEN_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SourceLanguage {
    Latin,
    Hebrew,
}

/// One medication recognized in a text blob. Lives for the duration of a
/// single analysis call; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationMention {
    /// The raw token as it appeared in the text.
    pub raw: String,
    /// Resolved canonical drug name; `None` when below threshold.
    pub canonical: Option<String>,
    /// Best similarity score against the lexicon, in [0, 1].
    pub confidence: f64,
    pub language: SourceLanguage,
}

/// A ranked did-you-mean candidate.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Suggestion {
    pub name: String,
    pub score: f64,
}

/// Resolve a block of free text to canonical medications.
///
/// Tokens resolve against every canonical name and alias; the best match
/// is kept iff it reaches `threshold`. The result is deduplicated by
/// canonical name, ordered by first occurrence. Never fails — malformed
/// input just resolves to fewer medications.
pub fn resolve_medications(
    text: &str,
    lexicon: &Lexicon,
    threshold: f64,
) -> Vec<MedicationMention> {
    let mut mentions: Vec<MedicationMention> = Vec::new();

    for token in tokenize(text) {
        if token.chars().count() < MIN_TOKEN_LEN {
            continue;
        }

        let Some((name, score)) = best_match(&token, lexicon) else {
            continue;
        };
        if score < threshold {
            continue;
        }
        if mentions.iter().any(|m| m.canonical.as_deref() == Some(name)) {
            continue;
        }

        let language = if is_hebrew(&token) {
            SourceLanguage::Hebrew
        } else {
            SourceLanguage::Latin
        };
        mentions.push(MedicationMention {
            raw: token,
            canonical: Some(name.to_string()),
            confidence: score,
            language,
        });
    }

    mentions
}

/// The deduplicated canonical names of the resolved mentions, in order.
pub fn resolved_names(mentions: &[MedicationMention]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for m in mentions {
        if let Some(name) = &m.canonical
            && !names.contains(name)
        {
            names.push(name.clone());
        }
    }
    names
}

/// Expand whole-word abbreviations inline, annotating each match with its
/// expansion. Exact token equality only — independent of fuzzy matching.
pub fn expand_abbreviations(text: &str, lexicon: &Lexicon) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            word.push(ch);
        } else {
            flush_word(&mut result, &mut word, lexicon);
            result.push(ch);
        }
    }
    flush_word(&mut result, &mut word, lexicon);

    result
}

fn flush_word(result: &mut String, word: &mut String, lexicon: &Lexicon) {
    if word.is_empty() {
        return;
    }
    match lexicon.find_abbreviation(word) {
        Some(entry) => {
            result.push_str(word);
            result.push_str(" (");
            result.push_str(entry.expansion);
            result.push(')');
        }
        None => result.push_str(word),
    }
    word.clear();
}

/// Ranked candidates for a single query token, at the looser search
/// threshold. Backs the interactive "did you mean" search box.
pub fn suggest(query: &str, lexicon: &Lexicon, limit: usize) -> Vec<Suggestion> {
    let q = query.trim().to_lowercase();
    if q.chars().count() < MIN_TOKEN_LEN {
        return Vec::new();
    }

    let mut candidates: Vec<Suggestion> = lexicon
        .drugs
        .iter()
        .filter_map(|drug| {
            let score = entry_score(&q, drug.name, drug.aliases);
            (score >= SEARCH_THRESHOLD).then(|| Suggestion {
                name: drug.name.to_string(),
                score,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates.truncate(limit);
    candidates
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn is_hebrew(token: &str) -> bool {
    token.chars().any(|c| ('\u{0590}'..='\u{05FF}').contains(&c))
}

fn entry_score(token: &str, name: &str, aliases: &[&str]) -> f64 {
    let mut best = similarity(token, name);
    for alias in aliases {
        let s = similarity(token, alias);
        if s > best {
            best = s;
        }
    }
    best
}

fn best_match(token: &str, lexicon: &Lexicon) -> Option<(&'static str, f64)> {
    let mut best: Option<(&'static str, f64)> = None;
    for drug in lexicon.drugs {
        let score = entry_score(token, drug.name, drug.aliases);
        if best.is_none_or(|(_, b)| score > b) {
            best = Some((drug.name, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> &'static Lexicon {
        Lexicon::builtin()
    }

    #[test]
    fn resolves_exact_names() {
        let mentions = resolve_medications("warfarin aspirin", lexicon(), DEFAULT_THRESHOLD);
        assert_eq!(resolved_names(&mentions), vec!["warfarin", "aspirin"]);
    }

    #[test]
    fn resolves_hebrew_brand_names() {
        let mentions = resolve_medications("קומדין, אספירין", lexicon(), DEFAULT_THRESHOLD);
        assert_eq!(resolved_names(&mentions), vec!["warfarin", "aspirin"]);
        assert!(mentions.iter().all(|m| m.language == SourceLanguage::Hebrew));
    }

    #[test]
    fn resolves_misspellings() {
        let mentions = resolve_medications("wafrin 5mg od", lexicon(), DEFAULT_THRESHOLD);
        assert_eq!(resolved_names(&mentions), vec!["warfarin"]);
        assert!(mentions[0].confidence >= DEFAULT_THRESHOLD);
    }

    #[test]
    fn drops_unmatched_tokens_silently() {
        let mentions =
            resolve_medications("patient reports headache", lexicon(), DEFAULT_THRESHOLD);
        assert!(mentions.is_empty());
    }

    #[test]
    fn deduplicates_by_first_occurrence() {
        let mentions = resolve_medications(
            "coumadin 5mg, warfarin 2.5mg alternating",
            lexicon(),
            DEFAULT_THRESHOLD,
        );
        assert_eq!(resolved_names(&mentions), vec!["warfarin"]);
        assert_eq!(mentions[0].raw, "coumadin");
    }

    #[test]
    fn empty_text_resolves_to_nothing() {
        assert!(resolve_medications("", lexicon(), DEFAULT_THRESHOLD).is_empty());
    }

    #[test]
    fn expands_whole_word_abbreviations() {
        let out = expand_abbreviations("aspirin 100mg po od", lexicon());
        assert_eq!(out, "aspirin 100mg po (by mouth) od (once daily)");
    }

    #[test]
    fn expansion_requires_exact_token() {
        // "pod" is not "po"/"od"; no annotation.
        let out = expand_abbreviations("pod", lexicon());
        assert_eq!(out, "pod");
    }

    #[test]
    fn suggest_ranks_close_names_first() {
        let suggestions = suggest("omeprazol", lexicon(), 3);
        assert_eq!(suggestions[0].name, "omeprazole");
        assert!(suggestions[0].score >= SEARCH_THRESHOLD);
    }

    #[test]
    fn suggest_ignores_short_queries() {
        assert!(suggest("om", lexicon(), 5).is_empty());
    }
}
