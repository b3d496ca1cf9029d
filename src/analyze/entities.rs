//! Entity span collection: recognizer adapter and provider fallback table.

use regex::Regex;

use crate::models::EntitySpan;
use crate::ner::EntityRecognizer;

/// Run the recognizer over at most `max_chars` characters of `text`.
///
/// This is a plain adapter: no filtering happens here. A missing recognizer
/// or a failed run degrades to zero spans; the rest of the pipeline never
/// notices beyond an informational log line.
pub fn recognize_spans(
    recognizer: Option<&dyn EntityRecognizer>,
    text: &str,
    max_chars: usize,
) -> Vec<EntitySpan> {
    let Some(recognizer) = recognizer else {
        return Vec::new();
    };

    let capped = truncate_chars(text, max_chars);
    match recognizer.recognize(capped) {
        Ok(spans) => spans,
        Err(e) => {
            tracing::info!("entity recognition ({}) failed: {}", recognizer.backend_id(), e);
            Vec::new()
        }
    }
}

/// Truncate at a character boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Matcher over the well-known-provider table.
///
/// One case-insensitive, word-bounded regex per table entry, compiled once
/// at construction. Matches are reported with the table's canonical
/// spelling, independent of how the document spelled them. Runs against the
/// full text regardless of recognizer availability.
pub struct ProviderMatcher {
    patterns: Vec<(Regex, String)>,
}

impl ProviderMatcher {
    pub fn new(providers: &[String]) -> Self {
        let patterns = providers
            .iter()
            .filter_map(|name| {
                let tokens: Vec<String> =
                    name.split_whitespace().map(|t| regex::escape(t)).collect();
                if tokens.is_empty() {
                    return None;
                }
                let pattern = format!(r"(?i)\b{}\b", tokens.join(r"\s+"));
                match Regex::new(&pattern) {
                    Ok(re) => Some((re, name.clone())),
                    Err(e) => {
                        tracing::warn!("skipping unusable provider entry '{}': {}", name, e);
                        None
                    }
                }
            })
            .collect();
        Self { patterns }
    }

    /// Canonical names of all providers mentioned in `text`.
    pub fn matches(&self, text: &str) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|(re, _)| re.is_match(text))
            .map(|(_, name)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::RecognizerError;

    struct FailingRecognizer;

    impl EntityRecognizer for FailingRecognizer {
        fn backend_id(&self) -> &str {
            "failing"
        }
        fn is_available(&self) -> bool {
            true
        }
        fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
            Err(RecognizerError::RunFailed("model exploded".into()))
        }
    }

    struct EchoRecognizer;

    impl EntityRecognizer for EchoRecognizer {
        fn backend_id(&self) -> &str {
            "echo"
        }
        fn is_available(&self) -> bool {
            true
        }
        fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
            Ok(vec![EntitySpan::new(text, "ORG")])
        }
    }

    fn providers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_recognizer_means_no_spans() {
        assert!(recognize_spans(None, "Verizon bill", 10_000).is_empty());
    }

    #[test]
    fn test_recognizer_failure_degrades_to_empty() {
        let spans = recognize_spans(Some(&FailingRecognizer), "text", 10_000);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_text_is_capped_before_recognition() {
        let long = "x".repeat(50);
        let spans = recognize_spans(Some(&EchoRecognizer), &long, 10);
        assert_eq!(spans[0].text.len(), 10);
    }

    #[test]
    fn test_cap_respects_char_boundaries() {
        let text = "é".repeat(8);
        let spans = recognize_spans(Some(&EchoRecognizer), &text, 5);
        assert_eq!(spans[0].text.chars().count(), 5);
    }

    #[test]
    fn test_provider_match_is_case_insensitive_and_canonical() {
        let matcher = ProviderMatcher::new(&providers(&["Verizon", "Wells Fargo"]));
        let found = matcher.matches("your VERIZON invoice from wells   fargo");
        assert_eq!(found, vec!["Verizon", "Wells Fargo"]);
    }

    #[test]
    fn test_provider_word_boundaries() {
        let matcher = ProviderMatcher::new(&providers(&["Chase"]));
        assert!(matcher.matches("purchases made today").is_empty());
        assert_eq!(matcher.matches("Chase statement"), vec!["Chase"]);
    }

    #[test]
    fn test_provider_with_punctuation() {
        let matcher = ProviderMatcher::new(&providers(&["AT&T", "Pacific Gas & Electric"]));
        assert_eq!(matcher.matches("Service by at&t"), vec!["AT&T"]);
        assert_eq!(
            matcher.matches("PACIFIC GAS & ELECTRIC statement"),
            vec!["Pacific Gas & Electric"]
        );
    }
}
