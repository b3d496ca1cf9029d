//! The in-memory document workspace.
//!
//! Holds the loaded-document list, the page ordering used for merging, and
//! the preview pointer. All three reference documents by path, so a rename
//! must move every reference at once; `repath` rebuilds the collections
//! rather than patching entries in place.

use std::path::{Path, PathBuf};

use crate::models::{LoadedDocument, PageEntry, Preview};
use crate::pdf::TextExtractor;

#[derive(Debug, Default)]
pub struct Workspace {
    documents: Vec<LoadedDocument>,
    pages: Vec<PageEntry>,
    preview: Option<Preview>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[LoadedDocument] {
        &self.documents
    }

    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Load documents into the workspace. Duplicates (by path) are skipped;
    /// each loaded document contributes one page entry per page.
    ///
    /// Returns (loaded, failed) counts.
    pub fn add_documents(&mut self, paths: &[PathBuf], extractor: &TextExtractor) -> (usize, usize) {
        let mut loaded = 0;
        let mut failed = 0;

        for path in paths {
            if self.documents.iter().any(|d| &d.path == path) {
                tracing::info!("skipped (already loaded): {}", path.display());
                continue;
            }
            let Some(page_count) = extractor.page_count(path) else {
                tracing::warn!("failed to load {}", path.display());
                failed += 1;
                continue;
            };

            let doc_index = self.documents.len();
            self.documents.push(LoadedDocument {
                path: path.clone(),
                page_count,
            });
            for page_number in 0..page_count {
                self.pages.push(PageEntry {
                    doc_index,
                    page_number,
                    path: path.clone(),
                });
            }
            loaded += 1;
            tracing::info!("loaded {} ({} pages)", path.display(), page_count);
        }

        (loaded, failed)
    }

    /// Register a document with a known page count (no pdfinfo probe).
    pub fn add_document_unchecked(&mut self, path: PathBuf, page_count: u32) {
        let doc_index = self.documents.len();
        for page_number in 0..page_count {
            self.pages.push(PageEntry {
                doc_index,
                page_number,
                path: path.clone(),
            });
        }
        self.documents.push(LoadedDocument { path, page_count });
    }

    pub fn clear(&mut self) {
        self.documents.clear();
        self.pages.clear();
        self.preview = None;
    }

    /// Move a page from one position in the ordering to another.
    pub fn move_page(&mut self, from: usize, to: usize) {
        if from < self.pages.len() && to < self.pages.len() {
            let entry = self.pages.remove(from);
            self.pages.insert(to, entry);
        }
    }

    /// Drop a single page from the ordering.
    pub fn remove_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.pages.remove(index);
        }
    }

    /// Remove a document and every page entry referencing it.
    pub fn remove_document(&mut self, doc_index: usize) {
        if doc_index >= self.documents.len() {
            return;
        }
        let removed = self.documents.remove(doc_index);
        self.pages = self
            .pages
            .iter()
            .filter(|p| p.path != removed.path)
            .cloned()
            .map(|mut p| {
                if p.doc_index > doc_index {
                    p.doc_index -= 1;
                }
                p
            })
            .collect();
        if self.preview.as_ref().is_some_and(|pv| pv.path == removed.path) {
            self.preview = None;
        }
    }

    pub fn set_preview(&mut self, path: PathBuf, page: u32) {
        self.preview = Some(Preview { path, page });
    }

    /// Move every reference from `old` to `new`: the loaded-document entry,
    /// all page-ordering entries, and the preview pointer. Collections are
    /// rebuilt, not mutated entry-by-entry, so a partially-updated ordering
    /// is never observable.
    pub fn repath(&mut self, old: &Path, new: &Path) {
        self.documents = self
            .documents
            .iter()
            .cloned()
            .map(|mut d| {
                if d.path == old {
                    d.path = new.to_path_buf();
                }
                d
            })
            .collect();
        self.pages = self
            .pages
            .iter()
            .cloned()
            .map(|mut p| {
                if p.path == old {
                    p.path = new.to_path_buf();
                }
                p
            })
            .collect();
        if let Some(preview) = self.preview.take() {
            self.preview = Some(if preview.path == old {
                Preview {
                    path: new.to_path_buf(),
                    page: preview.page,
                }
            } else {
                preview
            });
        }
    }

    /// True when any reference (document, page, preview) points at `path`.
    pub fn references(&self, path: &Path) -> bool {
        self.documents.iter().any(|d| d.path == path)
            || self.pages.iter().any(|p| p.path == path)
            || self.preview.as_ref().is_some_and(|pv| pv.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace_with_two_docs() -> Workspace {
        let mut ws = Workspace::new();
        ws.add_document_unchecked(PathBuf::from("/docs/a.pdf"), 2);
        ws.add_document_unchecked(PathBuf::from("/docs/b.pdf"), 1);
        ws.set_preview(PathBuf::from("/docs/a.pdf"), 0);
        ws
    }

    #[test]
    fn test_pages_follow_documents() {
        let ws = workspace_with_two_docs();
        assert_eq!(ws.documents().len(), 2);
        assert_eq!(ws.pages().len(), 3);
        assert_eq!(ws.pages()[0].doc_index, 0);
        assert_eq!(ws.pages()[2].doc_index, 1);
    }

    #[test]
    fn test_move_page() {
        let mut ws = workspace_with_two_docs();
        ws.move_page(2, 0);
        assert_eq!(ws.pages()[0].path, PathBuf::from("/docs/b.pdf"));
        assert_eq!(ws.pages().len(), 3);
    }

    #[test]
    fn test_remove_document_drops_its_pages() {
        let mut ws = workspace_with_two_docs();
        ws.remove_document(0);
        assert_eq!(ws.documents().len(), 1);
        assert_eq!(ws.pages().len(), 1);
        assert_eq!(ws.pages()[0].doc_index, 0);
        assert!(ws.preview().is_none());
    }

    #[test]
    fn test_repath_moves_every_reference() {
        let mut ws = workspace_with_two_docs();
        let old = PathBuf::from("/docs/a.pdf");
        let new = PathBuf::from("/docs/renamed.pdf");
        ws.repath(&old, &new);

        assert!(!ws.references(&old));
        assert_eq!(ws.documents()[0].path, new);
        assert!(ws.pages().iter().filter(|p| p.path == new).count() == 2);
        assert_eq!(ws.preview().unwrap().path, new);
        // Untouched document keeps its path.
        assert_eq!(ws.documents()[1].path, PathBuf::from("/docs/b.pdf"));
    }

    #[test]
    fn test_duplicate_paths_skipped() {
        let mut ws = Workspace::new();
        ws.add_document_unchecked(PathBuf::from("/docs/a.pdf"), 2);
        let extractor = TextExtractor::new();
        // Probe will fail for the nonexistent path, but the duplicate is
        // skipped before probing.
        let (loaded, failed) = ws.add_documents(&[PathBuf::from("/docs/a.pdf")], &extractor);
        assert_eq!((loaded, failed), (0, 0));
    }

    #[test]
    fn test_clear() {
        let mut ws = workspace_with_two_docs();
        ws.clear();
        assert!(ws.documents().is_empty());
        assert!(ws.pages().is_empty());
        assert!(ws.preview().is_none());
    }
}
