//! Rename command: suggestion by default, mutation behind --apply.

use std::path::Path;

use console::style;

use crate::analyze::Analyzer;
use crate::config::Settings;
use crate::rename::RenameOrchestrator;
use crate::workspace::Workspace;

pub fn cmd_rename(
    settings: &Settings,
    file: &Path,
    name: Option<&str>,
    apply: bool,
    json: bool,
) -> anyhow::Result<()> {
    let analyzer = Analyzer::new(settings.clone());
    let orchestrator = RenameOrchestrator::new(&analyzer);
    let mut workspace = Workspace::new();

    let outcome = orchestrator.rename(&mut workspace, file, name, !apply);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.success {
        println!("{}", style(&outcome.message).green());
    } else {
        eprintln!("{}", style(&outcome.message).red());
    }

    if !outcome.success {
        std::process::exit(1);
    }
    Ok(())
}
