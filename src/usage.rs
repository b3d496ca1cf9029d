//! Persistent usage statistics and UI state.
//!
//! A small JSON file tracking which functions get used and remembered UI
//! state (e.g. the last directory). Loading tolerates a missing or corrupt
//! file; every mutation saves immediately.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Usage record for a single function.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionUsage {
    pub count: u64,
    pub last_used: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageData {
    #[serde(default)]
    pub ui_state: HashMap<String, String>,
    #[serde(default)]
    pub function_usage: HashMap<String, FunctionUsage>,
}

/// Handle to the persisted usage file.
pub struct UsageStore {
    path: PathBuf,
    data: UsageData,
}

impl UsageStore {
    /// Load from `path`, falling back to defaults when the file is absent
    /// or unreadable.
    pub fn load(path: &Path) -> Self {
        let data = match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!("corrupt usage file {}: {}", path.display(), e);
                    UsageData::default()
                }
            },
            Err(_) => UsageData::default(),
        };
        Self {
            path: path.to_path_buf(),
            data,
        }
    }

    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(&self.data) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    tracing::warn!("could not save usage data: {}", e);
                }
            }
            Err(e) => tracing::warn!("could not serialize usage data: {}", e),
        }
    }

    /// Record one use of a function.
    pub fn record(&mut self, function_name: &str) {
        let entry = self
            .data
            .function_usage
            .entry(function_name.to_string())
            .or_default();
        entry.count += 1;
        entry.last_used = Some(Utc::now());
        self.save();
    }

    pub fn usage(&self, function_name: &str) -> Option<&FunctionUsage> {
        self.data.function_usage.get(function_name)
    }

    pub fn set_ui_state(&mut self, field: &str, value: &str) {
        self.data
            .ui_state
            .insert(field.to_string(), value.to_string());
        self.save();
    }

    pub fn ui_state(&self, field: &str) -> Option<&str> {
        self.data.ui_state.get(field).map(|s| s.as_str())
    }
}
