//! Configuration management for pdfdeck.
//!
//! Settings are loaded from a TOML file and carry the data tables the
//! analysis engine runs against: the personal-name whitelist, the
//! well-known-provider table, and the recognizer command. All of these are
//! configuration, not code, so they can be tuned without rebuilding.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default number of leading pages to extract text from.
pub const DEFAULT_MAX_PAGES: u32 = 3;

/// Default cap on characters handed to the entity recognizer.
pub const DEFAULT_RECOGNIZER_MAX_CHARS: usize = 10_000;

/// Settings for the optional statistical entity recognizer.
///
/// The recognizer is an external command that reads document text on stdin
/// and writes a JSON array of `{"text": ..., "label": ...}` spans on stdout.
/// When `command` is unset (or the binary is missing) the pipeline runs with
/// the provider fallback table only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerSettings {
    /// External recognizer command (e.g. "ner-tag"). None disables it.
    #[serde(default)]
    pub command: Option<String>,
    /// Extra arguments passed to the command.
    #[serde(default)]
    pub args: Vec<String>,
    /// Recognizer labels treated as organization-like. The recognizer
    /// conflates vendors with products and facilities, so all three count.
    #[serde(default = "default_org_labels")]
    pub org_labels: Vec<String>,
    /// Maximum characters of text handed to the recognizer.
    #[serde(default = "default_recognizer_max_chars")]
    pub max_chars: usize,
}

fn default_org_labels() -> Vec<String> {
    ["ORG", "PRODUCT", "FAC"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_recognizer_max_chars() -> usize {
    DEFAULT_RECOGNIZER_MAX_CHARS
}

impl Default for RecognizerSettings {
    fn default() -> Self {
        Self {
            command: None,
            args: Vec::new(),
            org_labels: default_org_labels(),
            max_chars: default_recognizer_max_chars(),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Number of leading pages to extract text from during analysis.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
    /// Interpret ambiguous D/M/Y dates month-first (US convention).
    #[serde(default = "default_month_first")]
    pub month_first: bool,
    /// Personal names accepted into rename suggestions. Matching is
    /// case-insensitive containment; the spelling here is what gets used.
    #[serde(default = "default_whitelist")]
    pub whitelist: Vec<String>,
    /// Well-known provider names matched against document text even when
    /// the recognizer is unavailable.
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,
    /// Entity recognizer settings.
    #[serde(default)]
    pub recognizer: RecognizerSettings,
    /// Path for the persisted usage-statistics file. Defaults next to the
    /// config file.
    #[serde(default)]
    pub usage_file: Option<PathBuf>,
}

fn default_max_pages() -> u32 {
    DEFAULT_MAX_PAGES
}

fn default_month_first() -> bool {
    true
}

fn default_whitelist() -> Vec<String> {
    ["Mark", "Anna", "Peter", "Sofia"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_providers() -> Vec<String> {
    [
        // Telecom
        "Verizon",
        "AT&T",
        "T-Mobile",
        "Comcast",
        "Xfinity",
        "Spectrum",
        // Tech
        "Apple",
        "Google",
        "Microsoft",
        "Amazon",
        "Netflix",
        // Banking
        "Chase",
        "Wells Fargo",
        "Bank of America",
        "Citibank",
        "Capital One",
        "American Express",
        // Insurance
        "Geico",
        "State Farm",
        "Progressive",
        "Allstate",
        // Healthcare
        "Aetna",
        "Cigna",
        "Blue Cross Blue Shield",
        "Kaiser Permanente",
        // Utilities
        "Pacific Gas & Electric",
        "Con Edison",
        "Duke Energy",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            month_first: default_month_first(),
            whitelist: default_whitelist(),
            providers: default_providers(),
            recognizer: RecognizerSettings::default(),
            usage_file: None,
        }
    }
}

impl Settings {
    /// Load settings from an explicit path, or from the default location,
    /// falling back to built-in defaults when no file exists.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => Some(expand_path(p)),
            None => default_config_path().filter(|p| p.exists()),
        };

        match path {
            Some(p) => {
                let raw = fs::read_to_string(&p)
                    .map_err(|e| anyhow::anyhow!("cannot read config {}: {}", p.display(), e))?;
                let settings: Settings = toml::from_str(&raw)
                    .map_err(|e| anyhow::anyhow!("invalid config {}: {}", p.display(), e))?;
                tracing::info!("loaded settings from {}", p.display());
                Ok(settings)
            }
            None => Ok(Self::default()),
        }
    }

    /// Resolve the usage-statistics file path.
    pub fn usage_path(&self) -> PathBuf {
        if let Some(ref p) = self.usage_file {
            return expand_path(p);
        }
        config_dir().join("usage.json")
    }
}

/// Expand `~` in user-supplied paths.
fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

/// Directory holding pdfdeck's config and usage files.
fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pdfdeck")
}

/// Default config file location.
fn default_config_path() -> Option<PathBuf> {
    Some(config_dir().join("config.toml"))
}
