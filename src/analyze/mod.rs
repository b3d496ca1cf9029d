//! The document analysis engine.
//!
//! Raw text flows strictly downward: dates and entity spans are extracted,
//! person spans are gated by the name whitelist, organization candidates are
//! filtered for address fragments and OCR gibberish, and the survivors are
//! composed into a filename suggestion. Analysis-stage degradations (no
//! text, no recognizer, unparsable dates) narrow the result; they never
//! fail it.

pub mod dates;
pub mod entities;
pub mod filename;
pub mod names;
pub mod orgs;

use std::path::Path;
use std::sync::OnceLock;

use crate::config::Settings;
use crate::models::{AnalysisResult, EntitySpan};
use crate::ner::{CommandRecognizer, EntityRecognizer};
use crate::pdf::TextExtractor;

pub use dates::extract_dates;
pub use entities::{recognize_spans, ProviderMatcher};
pub use filename::synthesize;
pub use names::filter_names;
pub use orgs::filter_organizations;

/// The analysis engine. Create one and share it; the recognizer is
/// initialized lazily on first use and never re-attempted after a failed
/// load.
pub struct Analyzer {
    settings: Settings,
    providers: ProviderMatcher,
    extractor: TextExtractor,
    recognizer: OnceLock<Option<Box<dyn EntityRecognizer>>>,
}

impl Analyzer {
    pub fn new(settings: Settings) -> Self {
        let providers = ProviderMatcher::new(&settings.providers);
        let extractor = TextExtractor::new().with_max_pages(settings.max_pages);
        Self {
            settings,
            providers,
            extractor,
            recognizer: OnceLock::new(),
        }
    }

    /// Create an analyzer with an explicit recognizer backend, bypassing
    /// lazy discovery. Used by tests and embedders with their own backend.
    pub fn with_recognizer(settings: Settings, recognizer: Box<dyn EntityRecognizer>) -> Self {
        let analyzer = Self::new(settings);
        let _ = analyzer.recognizer.set(Some(recognizer));
        analyzer
    }

    /// The recognizer capability, if present. First call performs the
    /// single-assignment initialization; unavailability is cached so a
    /// doomed load is not retried per document.
    fn recognizer(&self) -> Option<&dyn EntityRecognizer> {
        self.recognizer
            .get_or_init(|| {
                let Some(backend) = CommandRecognizer::from_settings(&self.settings.recognizer)
                else {
                    tracing::info!("no entity recognizer configured; using provider table only");
                    return None;
                };
                if !backend.is_available() {
                    tracing::info!(
                        "entity recognizer '{}' not found; using provider table only",
                        backend.backend_id()
                    );
                    return None;
                }
                Some(Box::new(backend) as Box<dyn EntityRecognizer>)
            })
            .as_deref()
    }

    /// Whether a recognizer backend is configured and loadable.
    pub fn recognizer_available(&self) -> bool {
        self.recognizer().is_some()
    }

    /// Analyze a document on disk. Extraction failure is absorbed: the
    /// result is simply empty of facts.
    pub fn analyze(&self, path: &Path) -> AnalysisResult {
        let text = self.extractor.extract_lenient(path);
        let original = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.analyze_text(&text, &original)
    }

    /// Analyze already-extracted text against an original filename.
    pub fn analyze_text(&self, text: &str, original_filename: &str) -> AnalysisResult {
        let dates = extract_dates(text, self.settings.month_first);

        let spans = recognize_spans(self.recognizer(), text, self.settings.recognizer.max_chars);
        let (persons, recognized_orgs) = self.split_spans(&spans);

        let mut org_candidates = recognized_orgs;
        org_candidates.extend(self.providers.matches(text));

        let names = filter_names(persons.iter().map(|s| s.as_str()), &self.settings.whitelist);
        let organizations = filter_organizations(org_candidates);
        let suggested_name = synthesize(&dates, &names, &organizations, original_filename);

        tracing::debug!(
            dates = dates.len(),
            names = names.len(),
            organizations = organizations.len(),
            "analysis complete"
        );

        AnalysisResult {
            dates,
            names,
            organizations,
            suggested_name,
        }
    }

    /// Split recognizer spans into person and organization-like candidates.
    fn split_spans(&self, spans: &[EntitySpan]) -> (Vec<String>, Vec<String>) {
        let mut persons = Vec::new();
        let mut orgs = Vec::new();
        for span in spans {
            if span.label.eq_ignore_ascii_case("PERSON") {
                persons.push(span.text.clone());
            } else if self.is_org_like(&span.label) {
                orgs.push(span.text.clone());
            }
        }
        (persons, orgs)
    }

    fn is_org_like(&self, label: &str) -> bool {
        self.settings
            .recognizer
            .org_labels
            .iter()
            .any(|l| l.eq_ignore_ascii_case(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::RecognizerError;

    struct StubRecognizer {
        spans: Vec<EntitySpan>,
    }

    impl EntityRecognizer for StubRecognizer {
        fn backend_id(&self) -> &str {
            "stub"
        }
        fn is_available(&self) -> bool {
            true
        }
        fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
            Ok(self.spans.clone())
        }
    }

    fn analyzer_with(spans: Vec<EntitySpan>) -> Analyzer {
        Analyzer::with_recognizer(Settings::default(), Box::new(StubRecognizer { spans }))
    }

    #[test]
    fn test_full_pipeline() {
        let analyzer = analyzer_with(vec![
            EntitySpan::new("Mark Johnson", "PERSON"),
            EntitySpan::new("Verizon", "ORG"),
        ]);
        let result =
            analyzer.analyze_text("Verizon bill issued March 3, 2024 for Mark Johnson", "scan.pdf");
        assert_eq!(result.dates, vec!["2024-03-03"]);
        assert_eq!(result.names, vec!["Mark"]);
        assert_eq!(result.organizations, vec!["Verizon"]);
        assert_eq!(result.suggested_name, "Verizon-for_Mark-2024-03-03.pdf");
    }

    #[test]
    fn test_whitelist_closure_through_pipeline() {
        let analyzer = analyzer_with(vec![EntitySpan::new("John Smith", "PERSON")]);
        let result = analyzer.analyze_text("Dear John Smith", "scan.pdf");
        assert!(result.names.is_empty());
    }

    #[test]
    fn test_fallback_table_without_recognizer() {
        let analyzer = Analyzer::new(Settings {
            recognizer: crate::config::RecognizerSettings {
                command: None,
                ..Default::default()
            },
            ..Default::default()
        });
        let result = analyzer.analyze_text("Your Comcast statement, 2023-07-01", "scan.pdf");
        assert_eq!(result.organizations, vec!["Comcast"]);
        assert_eq!(result.suggested_name, "Comcast-2023-07-01.pdf");
    }

    #[test]
    fn test_recognized_gibberish_is_filtered() {
        let analyzer = analyzer_with(vec![
            EntitySpan::new("I_l_l_l_a_l_l_l_e", "ORG"),
            EntitySpan::new("123 W Main St", "ORG"),
        ]);
        let result = analyzer.analyze_text("noise", "scan.pdf");
        assert!(result.organizations.is_empty());
    }

    #[test]
    fn test_product_and_facility_labels_count_as_orgs() {
        let analyzer = analyzer_with(vec![EntitySpan::new("Acme Widgets", "PRODUCT")]);
        let result = analyzer.analyze_text("receipt", "scan.pdf");
        assert_eq!(result.organizations, vec!["Acme Widgets"]);
    }

    #[test]
    fn test_empty_text_yields_bare_result() {
        let analyzer = Analyzer::new(Settings::default());
        let result = analyzer.analyze_text("", "holiday scan.pdf");
        assert!(result.is_bare());
        assert_eq!(result.suggested_name, "renamed_holiday_scan.pdf");
    }

    #[test]
    fn test_recognizer_absent_when_command_missing() {
        let analyzer = Analyzer::new(Settings {
            recognizer: crate::config::RecognizerSettings {
                command: Some("definitely-not-a-real-ner-cmd".into()),
                ..Default::default()
            },
            ..Default::default()
        });
        assert!(!analyzer.recognizer_available());
        // Cached: second call must not re-probe differently.
        assert!(!analyzer.recognizer_available());
    }
}
