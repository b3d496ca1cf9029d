//! Text extraction from PDF documents using pdftotext.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Handle command output, extracting stdout on success or returning appropriate error.
fn handle_cmd_output(
    result: std::io::Result<std::process::Output>,
    tool_name: &str,
    error_prefix: &str,
) -> Result<String, ExtractionError> {
    match result {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(ExtractionError::ExtractionFailed(format!(
                    "{}: {}",
                    error_prefix, stderr
                )))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ExtractionError::ToolNotFound(tool_name.to_string()))
        }
        Err(e) => Err(ExtractionError::Io(e)),
    }
}

/// Check if a binary is available in PATH.
pub fn check_binary(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Text extractor that shells out to poppler's pdftotext.
pub struct TextExtractor {
    /// Number of leading pages to extract.
    max_pages: u32,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self {
            max_pages: crate::config::DEFAULT_MAX_PAGES,
        }
    }
}

impl TextExtractor {
    /// Create a new text extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many leading pages to extract.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Extract text from up to the first `max_pages` pages.
    pub fn extract(&self, file_path: &Path) -> Result<String, ExtractionError> {
        if !file_path.exists() {
            return Err(ExtractionError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let last_page = self.max_pages.to_string();
        let output = Command::new("pdftotext")
            .args(["-layout", "-enc", "UTF-8", "-f", "1", "-l", &last_page])
            .arg(file_path)
            .arg("-") // Output to stdout
            .output();

        handle_cmd_output(output, "pdftotext (install poppler-utils)", "pdftotext failed")
    }

    /// Extract text, absorbing any failure into an empty string.
    ///
    /// The analysis pipeline treats "no text" as a valid, uninteresting
    /// document rather than an error.
    pub fn extract_lenient(&self, file_path: &Path) -> String {
        match self.extract(file_path) {
            Ok(text) => text,
            Err(e) => {
                tracing::info!("text extraction unavailable for {}: {}", file_path.display(), e);
                String::new()
            }
        }
    }

    /// Get the page count of a PDF.
    pub fn page_count(&self, file_path: &Path) -> Option<u32> {
        let output = Command::new("pdfinfo").arg(file_path).output().ok()?;

        if !output.status.success() {
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            if line.starts_with("Pages:") {
                return line.split_whitespace().nth(1).and_then(|s| s.parse().ok());
            }
        }
        None
    }

    /// Check if required tools are available.
    pub fn check_tools() -> Vec<(String, bool)> {
        ["pdftotext", "pdfinfo", "pdfseparate", "pdfunite"]
            .iter()
            .map(|tool| (tool.to_string(), check_binary(tool)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        let extractor = TextExtractor::new();
        let result = extractor.extract(Path::new("/nonexistent/file.pdf"));
        assert!(matches!(result, Err(ExtractionError::FileNotFound(_))));
    }

    #[test]
    fn test_lenient_extraction_absorbs_failure() {
        let extractor = TextExtractor::new();
        assert_eq!(extractor.extract_lenient(Path::new("/nonexistent/file.pdf")), "");
    }

    #[test]
    fn test_max_pages_floor() {
        let extractor = TextExtractor::new().with_max_pages(0);
        assert_eq!(extractor.max_pages, 1);
    }

    #[test]
    fn test_check_tools() {
        let tools = TextExtractor::check_tools();
        assert_eq!(tools.len(), 4);
    }
}
