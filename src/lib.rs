//! pdfdeck - PDF management and content-based renaming.
//!
//! A tool for loading PDF documents, ordering their pages, merging and
//! printing them, and suggesting filenames derived from document content
//! (dates, known names, vendor/organization mentions).

pub mod analyze;
pub mod cli;
pub mod config;
pub mod models;
pub mod ner;
pub mod pdf;
pub mod rename;
pub mod usage;
pub mod workspace;

pub use analyze::Analyzer;
pub use config::Settings;
pub use models::{AnalysisResult, EntitySpan, RenameOutcome, RenameState};
pub use rename::RenameOrchestrator;
pub use workspace::Workspace;
