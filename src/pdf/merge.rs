//! Page-level PDF merging via pdfseparate and pdfunite.
//!
//! Merging honors an arbitrary page ordering across multiple source
//! documents, so each needed page is first split out with `pdfseparate`,
//! then the single-page files are stitched in order with `pdfunite`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use thiserror::Error;

use crate::models::PageEntry;

/// Errors that can occur while merging pages.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("No pages to merge")]
    NoPages,

    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    #[error("Merge failed: {0}")]
    MergeFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn run_tool(mut cmd: Command, tool_name: &str, error_prefix: &str) -> Result<(), MergeError> {
    match cmd.output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(MergeError::MergeFailed(format!(
                "{}: {}",
                error_prefix,
                stderr.lines().take(3).collect::<Vec<_>>().join("\n")
            )))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(MergeError::ToolNotFound(tool_name.to_string()))
        }
        Err(e) => Err(MergeError::Io(e)),
    }
}

/// Merge the given page ordering into a single PDF at `output`.
///
/// Returns the number of pages written. The output name gets a `.pdf`
/// suffix appended when missing.
pub fn merge_pages(pages: &[PageEntry], output: &Path) -> Result<usize, MergeError> {
    if pages.is_empty() {
        return Err(MergeError::NoPages);
    }

    let output = ensure_pdf_extension(output);
    let scratch = TempDir::new()?;

    // Split each source document once; pdfseparate numbers pages from 1.
    let mut split_dirs: HashMap<PathBuf, PathBuf> = HashMap::new();
    for entry in pages {
        if split_dirs.contains_key(&entry.path) {
            continue;
        }
        let dir = scratch.path().join(format!("doc{}", split_dirs.len()));
        std::fs::create_dir_all(&dir)?;

        let mut cmd = Command::new("pdfseparate");
        cmd.arg(&entry.path).arg(dir.join("page-%d.pdf"));
        run_tool(
            cmd,
            "pdfseparate (install poppler-utils)",
            &format!("pdfseparate failed on {}", entry.path.display()),
        )?;
        split_dirs.insert(entry.path.clone(), dir);
    }

    // Collect the single-page files in workspace order.
    let mut ordered: Vec<PathBuf> = Vec::with_capacity(pages.len());
    for entry in pages {
        let dir = &split_dirs[&entry.path];
        let page_file = dir.join(format!("page-{}.pdf", entry.page_number + 1));
        if !page_file.exists() {
            return Err(MergeError::MergeFailed(format!(
                "page {} of {} was not produced by pdfseparate",
                entry.page_number + 1,
                entry.path.display()
            )));
        }
        ordered.push(page_file);
    }

    let mut cmd = Command::new("pdfunite");
    cmd.args(&ordered).arg(&output);
    run_tool(
        cmd,
        "pdfunite (install poppler-utils)",
        "pdfunite failed",
    )?;

    tracing::info!("merged {} pages into {}", ordered.len(), output.display());
    Ok(ordered.len())
}

/// Append `.pdf` to the output name when missing.
fn ensure_pdf_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => path.to_path_buf(),
        _ => {
            let mut s = path.as_os_str().to_owned();
            s.push(".pdf");
            PathBuf::from(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_list_is_rejected() {
        let result = merge_pages(&[], Path::new("/tmp/out.pdf"));
        assert!(matches!(result, Err(MergeError::NoPages)));
    }

    #[test]
    fn test_pdf_extension_appended() {
        assert_eq!(
            ensure_pdf_extension(Path::new("/tmp/merged")),
            PathBuf::from("/tmp/merged.pdf")
        );
        assert_eq!(
            ensure_pdf_extension(Path::new("/tmp/merged.PDF")),
            PathBuf::from("/tmp/merged.PDF")
        );
    }
}
