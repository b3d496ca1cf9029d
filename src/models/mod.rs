//! Data types shared across the engine, workspace, and CLI.

mod analysis;
mod document;

pub use analysis::{AnalysisResult, EntitySpan, RenameOutcome, RenameState};
pub use document::{LoadedDocument, PageEntry, Preview};
