//! The rename orchestrator.
//!
//! Drives analysis, dry-run suggestion, collision detection, the rename
//! itself, and the workspace reference update. The rename plus reference
//! update is one conceptual transaction: a filesystem failure leaves every
//! reference untouched; success updates all of them before returning.

use std::path::{Path, PathBuf};

use crate::analyze::Analyzer;
use crate::models::{AnalysisResult, RenameOutcome, RenameState};
use crate::workspace::Workspace;

pub struct RenameOrchestrator<'a> {
    analyzer: &'a Analyzer,
}

impl<'a> RenameOrchestrator<'a> {
    pub fn new(analyzer: &'a Analyzer) -> Self {
        Self { analyzer }
    }

    /// Analyze `path` and rename it, or only suggest in dry-run mode.
    ///
    /// `new_name` overrides the synthesized suggestion when supplied. The
    /// destination stays in the source's directory.
    pub fn rename(
        &self,
        workspace: &mut Workspace,
        path: &Path,
        new_name: Option<&str>,
        dry_run: bool,
    ) -> RenameOutcome {
        if !path.exists() {
            return RenameOutcome {
                success: false,
                message: format!("File not found: {}", path.display()),
                state: RenameState::Failed,
                analysis: AnalysisResult::empty(String::new()),
            };
        }

        // ANALYZING: always runs, dry-run or not.
        let analysis = self.analyzer.analyze(path);

        // SUGGESTED.
        let final_name = match new_name {
            Some(name) => ensure_pdf_name(name),
            None => analysis.suggested_name.clone(),
        };

        if dry_run {
            return RenameOutcome {
                success: true,
                message: format!("Suggested name: {}", final_name),
                state: RenameState::DryRunEnd,
                analysis,
            };
        }

        // RENAMING.
        let destination = path
            .parent()
            .map(|dir| dir.join(&final_name))
            .unwrap_or_else(|| PathBuf::from(&final_name));

        if destination.exists() && !is_same_file(path, &destination) {
            return RenameOutcome {
                success: false,
                message: format!("A file named {} already exists", final_name),
                state: RenameState::Conflict,
                analysis,
            };
        }

        match std::fs::rename(path, &destination) {
            Ok(()) => {
                workspace.repath(path, &destination);
                tracing::info!("renamed {} -> {}", path.display(), destination.display());
                RenameOutcome {
                    success: true,
                    message: format!("Renamed to {}", final_name),
                    state: RenameState::Renamed,
                    analysis,
                }
            }
            Err(e) => RenameOutcome {
                success: false,
                message: format!("Rename failed: {}", e),
                state: RenameState::Failed,
                analysis,
            },
        }
    }
}

/// Append `.pdf` to a user-supplied name when missing.
fn ensure_pdf_name(name: &str) -> String {
    if name.to_lowercase().ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{}.pdf", name)
    }
}

/// Renaming a file onto itself is not a conflict.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_suffix_appended() {
        assert_eq!(ensure_pdf_name("invoice"), "invoice.pdf");
        assert_eq!(ensure_pdf_name("invoice.pdf"), "invoice.pdf");
        assert_eq!(ensure_pdf_name("invoice.PDF"), "invoice.PDF");
    }
}
