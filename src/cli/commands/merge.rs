//! Merge command.

use std::path::{Path, PathBuf};

use console::style;

use crate::config::Settings;
use crate::pdf::{merge_pages, TextExtractor};
use crate::workspace::Workspace;

pub fn cmd_merge(settings: &Settings, output: &Path, files: &[PathBuf]) -> anyhow::Result<()> {
    if files.is_empty() {
        anyhow::bail!("no input files given");
    }

    let extractor = TextExtractor::new().with_max_pages(settings.max_pages);
    let mut workspace = Workspace::new();
    let (loaded, failed) = workspace.add_documents(files, &extractor);

    if failed > 0 {
        eprintln!(
            "{}",
            style(format!("{} file(s) could not be loaded", failed)).yellow()
        );
    }
    if loaded == 0 {
        anyhow::bail!("none of the input files could be loaded");
    }

    let pages = merge_pages(workspace.pages(), output)?;
    println!(
        "{}",
        style(format!("Merged {} pages into {}", pages, output.display())).green()
    );
    Ok(())
}
