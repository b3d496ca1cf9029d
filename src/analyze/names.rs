//! Whitelist filtering for recognized person names.
//!
//! Free-text NER over noisy OCR output produces too many false positives to
//! trust on its own, so person spans only survive when they contain a
//! configured whitelist entry. It is the whitelist's spelling, not the raw
//! span, that gets recorded.

/// Filter person candidates down to canonical whitelist names.
///
/// Case-insensitive substring containment; first matching entry wins per
/// candidate; output is unique in discovery order.
pub fn filter_names<'a, I>(candidates: I, whitelist: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<String> = Vec::new();

    for candidate in candidates {
        let lowered = candidate.to_lowercase();
        for entry in whitelist {
            if lowered.contains(&entry.to_lowercase()) {
                if !out.contains(entry) {
                    out.push(entry.clone());
                }
                break;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whitelist(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_whitelist_closure() {
        // Names outside the whitelist never appear, recognizer or not.
        let names = filter_names(["John Smith"], &whitelist(&["Mark", "Anna"]));
        assert!(names.is_empty());
    }

    #[test]
    fn test_canonical_spelling_wins() {
        let names = filter_names(["mark johnson"], &whitelist(&["Mark"]));
        assert_eq!(names, vec!["Mark"]);
    }

    #[test]
    fn test_containment_is_case_insensitive() {
        let names = filter_names(["MR. MARK JOHNSON"], &whitelist(&["Mark"]));
        assert_eq!(names, vec!["Mark"]);
    }

    #[test]
    fn test_dedup_preserves_insertion_order() {
        let names = filter_names(
            ["Anna Lee", "Mark Johnson", "anna again"],
            &whitelist(&["Mark", "Anna"]),
        );
        assert_eq!(names, vec!["Anna", "Mark"]);
    }

    #[test]
    fn test_first_matching_entry_wins() {
        // A span containing two whitelist names yields only the first entry.
        let names = filter_names(["Mark and Anna"], &whitelist(&["Mark", "Anna"]));
        assert_eq!(names, vec!["Mark"]);
    }
}
