//! Validity filtering for organization candidates.
//!
//! Recognizer output on scanned documents is polluted by two families of
//! false positives: street addresses (which recognizers happily label ORG)
//! and OCR gibberish like `I_l_l_l_a`. A candidate is rejected when any one
//! of the layered heuristics below fires.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Leading digits + optional directional + word + street-type token.
static RE_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*\d+\s+(?:[nsew]{1,2}\s+)?\w+\s+(?:st|street|ave|avenue|blvd|boulevard|dr|drive|rd|road|ln|lane|ct|court|way|pl|place|hwy|highway)\.?\b",
    )
    .unwrap()
});

/// Single letters joined by underscores: a_b_c_d and longer.
static RE_ALTERNATING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z](?:_[a-z]){3,}").unwrap());

/// Capitalized street words for the digits-plus-street-word heuristic.
/// Catches co-located numeric + street fragments the address regex misses.
const STREET_WORDS: &[&str] = &[
    "St", "Street", "Ave", "Avenue", "Blvd", "Boulevard", "Dr", "Drive", "Rd", "Road", "Ln",
    "Lane", "Ct", "Court", "Way", "Pl", "Place", "Main", "Broadway",
];

/// Keep only candidates that survive every heuristic, deduplicated by exact
/// string equality in first-seen order.
pub fn filter_organizations<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for candidate in candidates {
        if is_valid_organization(&candidate) && !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

/// True when no rejection heuristic fires.
pub fn is_valid_organization(candidate: &str) -> bool {
    !(looks_like_address(candidate)
        || has_digits_with_street_word(candidate)
        || has_single_char_segments(candidate)
        || has_excess_separators(candidate)
        || RE_ALTERNATING.is_match(candidate)
        || has_dominant_character(candidate)
        || is_too_short(candidate)
        || lacks_alphanumerics(candidate)
        || is_mostly_single_letter_words(candidate))
}

fn looks_like_address(text: &str) -> bool {
    RE_ADDRESS.is_match(text)
}

fn has_digits_with_street_word(text: &str) -> bool {
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| c == '.' || c == ','))
        .any(|word| STREET_WORDS.contains(&word))
}

/// More than 3 `_`/`-` segments where over half are single characters.
fn has_single_char_segments(text: &str) -> bool {
    let segments: Vec<&str> = text.split(['_', '-']).collect();
    if segments.len() <= 3 {
        return false;
    }
    let single = segments.iter().filter(|s| s.chars().count() == 1).count();
    single * 2 > segments.len()
}

fn has_excess_separators(text: &str) -> bool {
    let underscores = text.chars().filter(|&c| c == '_').count();
    let hyphens = text.chars().filter(|&c| c == '-').count();
    underscores > 3 || hyphens > 3
}

/// Most frequent character exceeds 40% of the alphanumeric-only text.
fn has_dominant_character(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();
    if cleaned.is_empty() {
        return false;
    }
    let mut counts: HashMap<char, usize> = HashMap::new();
    for &c in &cleaned {
        *counts.entry(c).or_insert(0) += 1;
    }
    let max = counts.values().copied().max().unwrap_or(0);
    (max as f64) > 0.4 * (cleaned.len() as f64)
}

/// Stripped of separators and whitespace, shorter than 3 characters.
fn is_too_short(text: &str) -> bool {
    let stripped = text
        .chars()
        .filter(|&c| c != '_' && c != '-' && !c.is_whitespace())
        .count();
    stripped < 3
}

/// Fewer than half of the raw characters are alphanumeric.
fn lacks_alphanumerics(text: &str) -> bool {
    let total = text.chars().count();
    if total == 0 {
        return true;
    }
    let alnum = text.chars().filter(|c| c.is_alphanumeric()).count();
    alnum * 2 < total
}

/// More than 2 words where over 60% are single letters, after turning
/// separators into spaces.
fn is_mostly_single_letter_words(text: &str) -> bool {
    let spaced = text.replace(['_', '-'], " ");
    let words: Vec<&str> = spaced.split_whitespace().collect();
    if words.len() <= 2 {
        return false;
    }
    let single = words.iter().filter(|w| w.chars().count() == 1).count();
    (single as f64) > 0.6 * (words.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_gibberish_rejected() {
        assert!(!is_valid_organization("I_l_l_l_a_l_l_l_e"));
        assert!(!is_valid_organization("I_l_l_l_a"));
    }

    #[test]
    fn test_real_vendors_pass() {
        assert!(is_valid_organization("Verizon"));
        assert!(is_valid_organization("Pacific Gas & Electric"));
        assert!(is_valid_organization("Blue Cross Blue Shield"));
        assert!(is_valid_organization("T-Mobile"));
    }

    #[test]
    fn test_address_rejected() {
        assert!(!is_valid_organization("123 W Main St"));
        assert!(!is_valid_organization("4501 Oak Avenue"));
        assert!(!is_valid_organization("99 NE Broadway Blvd."));
    }

    #[test]
    fn test_digits_plus_street_word_rejected() {
        // No leading-digit shape, but a number and a street word co-occur.
        assert!(!is_valid_organization("Suite 200 Main"));
    }

    #[test]
    fn test_excess_separators_rejected() {
        assert!(!is_valid_organization("a_b_c_d_e"));
        assert!(!is_valid_organization("x-y-z-w-v"));
    }

    #[test]
    fn test_dominant_character_rejected() {
        assert!(!is_valid_organization("aaaaaab"));
        assert!(!is_valid_organization("lllllIl"));
    }

    #[test]
    fn test_too_short_rejected() {
        assert!(!is_valid_organization("ab"));
        assert!(!is_valid_organization("_-_"));
        assert!(!is_valid_organization(""));
    }

    #[test]
    fn test_low_alphanumeric_ratio_rejected() {
        assert!(!is_valid_organization("@#$% Inc !!!!"));
    }

    #[test]
    fn test_single_letter_words_rejected() {
        assert!(!is_valid_organization("a b c d e"));
    }

    #[test]
    fn test_dedup_first_seen_order() {
        let result = filter_organizations(candidates(&[
            "Verizon",
            "123 W Main St",
            "Comcast",
            "Verizon",
        ]));
        assert_eq!(result, vec!["Verizon", "Comcast"]);
    }
}
