//! Filename synthesis from extracted facts.
//!
//! Deterministic composition: `[Org]-[for_First]-[Date]`, degrading through
//! `[First]-[Date]` and a stem-prefix-plus-date form down to
//! `renamed_<stem>.pdf` when nothing was found.

use std::path::Path;

/// Punctuation stripped from name and organization components.
const DISALLOWED: &[char] = &[
    '?', '&', '#', '@', '!', '$', '%', '^', '*', '+', '=', '[', ']', '{', '}', '(', ')', '<', '>',
    ':', ';', '"', '\'', ',', '.', '/', '\\', '|', '`', '~',
];

/// Characters the filesystem will not accept in a filename.
const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// How much of the original stem survives when it anchors a date-only name.
const STEM_PREFIX_LEN: usize = 24;

/// Compose a filename from the analysis facts and the original filename.
pub fn synthesize(
    dates: &[String],
    names: &[String],
    organizations: &[String],
    original_filename: &str,
) -> String {
    let org = organizations
        .first()
        .map(|o| sanitize_component(o))
        .filter(|s| !s.is_empty());
    let name = names
        .first()
        .map(|n| first_name(&sanitize_component(n)))
        .filter(|s| !s.is_empty());
    let date = dates.first().cloned();

    let mut parts: Vec<String> = Vec::new();
    if let Some(org) = org {
        parts.push(org);
        if let Some(name) = name {
            parts.push(format!("for_{}", name));
        }
    } else if let Some(name) = name {
        parts.push(name);
    }

    // With no organization and no name, anchor a found date to a prefix of
    // the original stem; with no facts at all, fall back to renamed_<stem>.
    if parts.is_empty() {
        if date.is_some() {
            let stem: String = sanitize_component(stem_of(original_filename))
                .chars()
                .take(STEM_PREFIX_LEN)
                .collect();
            if !stem.is_empty() {
                parts.push(stem);
            }
        } else {
            return strip_reserved(&format!(
                "renamed_{}.pdf",
                sanitize_component(stem_of(original_filename))
            ));
        }
    }

    if let Some(date) = date {
        parts.push(date);
    }

    let joined = sanitize_component(&parts.join("-"));
    strip_reserved(&format!("{}.pdf", joined))
}

/// Sanitize one filename component: collapse whitespace, strip disallowed
/// punctuation, trim, then turn the remaining spaces into underscores.
pub fn sanitize_component(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let stripped: String = collapsed.chars().filter(|c| !DISALLOWED.contains(c)).collect();
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .replace(' ', "_")
}

/// The person component is reduced to its first name: everything before the
/// first underscore of the sanitized text.
fn first_name(sanitized: &str) -> String {
    sanitized
        .split('_')
        .next()
        .unwrap_or_default()
        .to_string()
}

fn stem_of(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
}

fn strip_reserved(filename: &str) -> String {
    filename.chars().filter(|c| !RESERVED.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_composition() {
        let name = synthesize(
            &strings(&["2024-03-03"]),
            &strings(&["Mark"]),
            &strings(&["Verizon"]),
            "scan0001.pdf",
        );
        assert_eq!(name, "Verizon-for_Mark-2024-03-03.pdf");
    }

    #[test]
    fn test_name_only_composition() {
        let name = synthesize(&strings(&["2024-03-03"]), &strings(&["Mark"]), &[], "scan.pdf");
        assert_eq!(name, "Mark-2024-03-03.pdf");
    }

    #[test]
    fn test_org_without_name() {
        let name = synthesize(&strings(&["2024-03-03"]), &[], &strings(&["Verizon"]), "scan.pdf");
        assert_eq!(name, "Verizon-2024-03-03.pdf");
    }

    #[test]
    fn test_no_facts_falls_back() {
        let name = synthesize(&[], &[], &[], "scan0001.pdf");
        assert_eq!(name, "renamed_scan0001.pdf");
    }

    #[test]
    fn test_date_only_keeps_stem_prefix() {
        let name = synthesize(&strings(&["2024-03-03"]), &[], &[], "bank statement.pdf");
        assert_eq!(name, "bank_statement-2024-03-03.pdf");
    }

    #[test]
    fn test_most_recent_date_is_used() {
        let name = synthesize(
            &strings(&["2024-12-31", "2020-01-01"]),
            &strings(&["Mark"]),
            &[],
            "scan.pdf",
        );
        assert_eq!(name, "Mark-2024-12-31.pdf");
    }

    #[test]
    fn test_person_component_reduced_to_first_name() {
        let name = synthesize(&[], &strings(&["Mark Johnson"]), &[], "scan.pdf");
        assert_eq!(name, "Mark.pdf");
    }

    #[test]
    fn test_component_sanitization() {
        assert_eq!(sanitize_component("  Pacific\tGas &\nElectric  "), "Pacific_Gas_Electric");
        assert_eq!(sanitize_component("Acme, Inc."), "Acme_Inc");
        assert_eq!(sanitize_component("a/b\\c|d"), "abcd");
    }

    #[test]
    fn test_joined_string_has_no_reserved_chars() {
        let name = synthesize(&[], &[], &strings(&["We<ird Na:me"]), "scan.pdf");
        assert!(!name.contains(['<', ':']));
        assert!(name.ends_with(".pdf"));
    }
}
