//! Workspace document types: loaded documents, page ordering, preview.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A PDF loaded into the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedDocument {
    /// Current path on disk. Updated when the document is renamed.
    pub path: PathBuf,
    /// Page count at load time.
    pub page_count: u32,
}

impl LoadedDocument {
    /// Basename for display, lossy on non-UTF-8 names.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// One entry in the workspace page ordering.
///
/// Keyed by document identity (`doc_index` into the loaded list) plus the
/// 0-based page number; `path` is denormalized for display and merging and
/// is rebuilt wholesale when a document moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub doc_index: usize,
    pub page_number: u32,
    pub path: PathBuf,
}

/// The currently previewed document and page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub path: PathBuf,
    pub page: u32,
}
