//! Line normalization and fuzzy label matching.
//!
//! OCR output is noisy: mixed case, stray diacritics, dropped or swapped
//! letters. Matching happens on a normalized copy of each line, first by
//! substring against the longer synonyms, then token by token with a
//! bounded edit distance.

use crate::model::ChemicalMetric;
use crate::parsing::synonyms::{exact_synonym_of, synonyms_for};

/// Lowercases and folds diacritics so that "Natrium", "NATRIUM" and a
/// mangled "Nätrium" all compare equal. Combining marks (OCR engines
/// sometimes emit decomposed text) are dropped outright.
pub fn normalize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars().flat_map(char::to_lowercase) {
        match c {
            '\u{0300}'..='\u{036f}' => {}
            'ä' | 'á' | 'à' | 'â' | 'å' => out.push('a'),
            'é' | 'è' | 'ê' | 'ë' => out.push('e'),
            'í' | 'ì' | 'î' | 'ï' => out.push('i'),
            'ö' | 'ó' | 'ò' | 'ô' | 'õ' => out.push('o'),
            'ü' | 'ú' | 'ù' | 'û' => out.push('u'),
            'ß' => out.push_str("ss"),
            'ç' => out.push('c'),
            'ñ' => out.push('n'),
            _ => out.push(c),
        }
    }
    out
}

/// Byte ranges of the tokens in a normalized line. A token is a maximal
/// run of `[a-z0-9+]`; everything else separates.
fn token_ranges(line: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        let is_token_char = c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+';
        match (is_token_char, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                ranges.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        ranges.push((s, line.len()));
    }
    ranges
}

/// Classic full-matrix Levenshtein. Inputs here are label tokens, a
/// handful of characters each, so the quadratic table is fine.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Allowed edit distance for a synonym: two for anything of length four
/// and up, less for the short ion shorthands so "na" cannot absorb
/// arbitrary two-letter noise.
fn max_distance(synonym: &str) -> usize {
    2.min(synonym.chars().count() / 2)
}

/// Tries to locate `metric`'s label in a normalized line.
///
/// Returns the byte offset just past the matched label so the caller can
/// pick up the first number after it. Two passes:
///
/// 1. substring search for synonyms of at least three characters, and
/// 2. per-token bounded edit distance for everything that remains.
///
/// A token that is the verbatim synonym of a different metric is skipped
/// in pass two; "calcium" sits within edit distance 2 of "kalium" and
/// must never resolve as potassium.
pub fn match_line(normalized: &str, metric: ChemicalMetric) -> Option<usize> {
    let synonyms = synonyms_for(metric);

    for syn in synonyms {
        if syn.chars().count() >= 3 {
            if let Some(pos) = normalized.find(syn) {
                return Some(pos + syn.len());
            }
        }
    }

    for (start, end) in token_ranges(normalized) {
        let token = &normalized[start..end];
        if let Some(owner) = exact_synonym_of(token) {
            if owner == metric {
                return Some(end);
            }
            continue;
        }
        for syn in synonyms {
            if levenshtein(token, syn) <= max_distance(syn) {
                return Some(end);
            }
        }
    }

    None
}
