//! Printing through the system spooler.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Errors that can occur while printing.
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("No print command found (install lpr or lp)")]
    SpoolerNotFound,

    #[error("Print failed: {0}")]
    PrintFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Send a document to the default printer via lpr, falling back to lp.
///
/// Returns the name of the command that accepted the job.
pub fn print_document(path: &Path) -> Result<String, PrintError> {
    if !path.exists() {
        return Err(PrintError::FileNotFound(path.display().to_string()));
    }

    match spool_with("lpr", path) {
        Err(PrintError::SpoolerNotFound) => spool_with("lp", path),
        other => other,
    }
}

fn spool_with(command: &str, path: &Path) -> Result<String, PrintError> {
    let output = Command::new(command).arg(path).output();

    match output {
        Ok(out) if out.status.success() => Ok(command.to_string()),
        Ok(out) => {
            let stderr = String::from_utf8_lossy(&out.stderr);
            Err(PrintError::PrintFailed(stderr.trim().to_string()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PrintError::SpoolerNotFound),
        Err(e) => Err(PrintError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_fails_before_spooling() {
        let result = print_document(Path::new("/nonexistent/file.pdf"));
        assert!(matches!(result, Err(PrintError::FileNotFound(_))));
    }
}
