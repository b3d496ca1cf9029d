//! Optional statistical entity recognizer.
//!
//! The recognizer is a capability, not a requirement: when no backend is
//! configured or its binary is missing, the analysis pipeline runs on the
//! provider fallback table alone. The shipped backend shells out to an
//! external command that reads text on stdin and emits a JSON array of
//! `{"text": ..., "label": ...}` spans on stdout.

use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;

use crate::config::RecognizerSettings;
use crate::models::EntitySpan;
use crate::pdf::text::check_binary;

/// Errors that can occur while running the recognizer.
///
/// All of these are absorbed by the pipeline (logged, never propagated);
/// a failed recognizer run means zero spans, not a failed analysis.
#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("Recognizer command not found: {0}")]
    CommandNotFound(String),

    #[error("Recognizer failed: {0}")]
    RunFailed(String),

    #[error("Recognizer output is not valid span JSON: {0}")]
    BadOutput(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A named-entity recognizer producing labeled spans.
pub trait EntityRecognizer: Send + Sync {
    /// Identifier for logging and the tools table.
    fn backend_id(&self) -> &str;

    /// Whether the backend can run right now.
    fn is_available(&self) -> bool;

    /// Label entity spans in `text`.
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError>;
}

/// Recognizer backed by an external command.
pub struct CommandRecognizer {
    command: String,
    args: Vec<String>,
}

impl CommandRecognizer {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }

    /// Build from settings; None when no command is configured.
    pub fn from_settings(settings: &RecognizerSettings) -> Option<Self> {
        settings
            .command
            .as_ref()
            .map(|cmd| Self::new(cmd.clone(), settings.args.clone()))
    }
}

impl EntityRecognizer for CommandRecognizer {
    fn backend_id(&self) -> &str {
        &self.command
    }

    fn is_available(&self) -> bool {
        check_binary(&self.command)
    }

    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RecognizerError::CommandNotFound(self.command.clone())
                } else {
                    RecognizerError::Io(e)
                }
            })?;

        // stdin is piped above, so take() cannot fail
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecognizerError::RunFailed(format!(
                "{} exited with {:?}: {}",
                self.command,
                output.status.code(),
                stderr.lines().take(3).collect::<Vec<_>>().join("\n")
            )));
        }

        let spans: Vec<EntitySpan> = serde_json::from_slice(&output.stdout)?;
        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_requires_command() {
        let settings = RecognizerSettings::default();
        assert!(CommandRecognizer::from_settings(&settings).is_none());

        let settings = RecognizerSettings {
            command: Some("ner-tag".into()),
            ..Default::default()
        };
        let recognizer = CommandRecognizer::from_settings(&settings).unwrap();
        assert_eq!(recognizer.backend_id(), "ner-tag");
    }

    #[test]
    fn test_missing_command_is_reported() {
        let recognizer = CommandRecognizer::new("definitely-not-a-real-ner-cmd".into(), vec![]);
        assert!(!recognizer.is_available());
        let result = recognizer.recognize("some text");
        assert!(matches!(result, Err(RecognizerError::CommandNotFound(_))));
    }

    #[test]
    fn test_span_json_decodes() {
        let spans: Vec<EntitySpan> =
            serde_json::from_str(r#"[{"text": "Verizon", "label": "ORG"}]"#).unwrap();
        assert_eq!(spans, vec![EntitySpan::new("Verizon", "ORG")]);
    }
}
