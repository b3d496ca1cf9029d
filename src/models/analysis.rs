//! Analysis and rename result types.
//!
//! `AnalysisResult` is the wire contract a front end depends on: the field
//! names and the descending order of `dates` are stable.

use serde::{Deserialize, Serialize};

/// A labeled text span produced by the entity recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Matched text as it appeared in the document.
    pub text: String,
    /// Recognizer label (e.g. "PERSON", "ORG", "PRODUCT", "FAC").
    pub label: String,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Everything the analysis pipeline extracted from one document.
///
/// Immutable after creation; owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// ISO `YYYY-MM-DD` dates, unique, most recent first.
    pub dates: Vec<String>,
    /// Canonical whitelist names, unique, in discovery order.
    pub names: Vec<String>,
    /// Validated organization names, unique, in discovery order.
    pub organizations: Vec<String>,
    /// Filename synthesized from the facts above.
    pub suggested_name: String,
}

impl AnalysisResult {
    /// Result for a document that yielded no text at all.
    pub fn empty(suggested_name: String) -> Self {
        Self {
            dates: Vec::new(),
            names: Vec::new(),
            organizations: Vec::new(),
            suggested_name,
        }
    }

    /// True when no date, name, or organization was found.
    pub fn is_bare(&self) -> bool {
        self.dates.is_empty() && self.names.is_empty() && self.organizations.is_empty()
    }
}

/// Terminal and intermediate states of the rename state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameState {
    Analyzing,
    Suggested,
    DryRunEnd,
    Renaming,
    Renamed,
    Conflict,
    Failed,
}

impl RenameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analyzing => "analyzing",
            Self::Suggested => "suggested",
            Self::DryRunEnd => "dry_run_end",
            Self::Renaming => "renaming",
            Self::Renamed => "renamed",
            Self::Conflict => "conflict",
            Self::Failed => "failed",
        }
    }

    /// True for states in which no further transition happens.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::DryRunEnd | Self::Renamed | Self::Conflict | Self::Failed
        )
    }
}

/// Outcome of a rename call, in both dry-run and apply modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOutcome {
    /// Whether the call reached its goal (a suggestion in dry-run mode, a
    /// completed rename otherwise).
    pub success: bool,
    /// Human-readable description of what happened.
    pub message: String,
    /// Terminal state of the state machine.
    pub state: RenameState,
    /// The analysis computed for the document. Present even on conflict or
    /// filesystem failure so the caller can retry with a manual name.
    pub analysis: AnalysisResult,
}
