//! PDF collaborators backed by external tools (poppler-utils, lpr).
//!
//! These modules are glue around the analysis engine: text extraction feeds
//! it, merge and print consume the workspace page ordering.

pub mod merge;
pub mod print;
pub mod text;

pub use merge::{merge_pages, MergeError};
pub use print::{print_document, PrintError};
pub use text::{ExtractionError, TextExtractor};
