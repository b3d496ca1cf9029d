//! Print command.

use std::path::Path;

use console::style;

use crate::pdf::print_document;

pub fn cmd_print(file: &Path) -> anyhow::Result<()> {
    let spooler = print_document(file)?;
    println!(
        "{}",
        style(format!("Sent to print via {}: {}", spooler, file.display())).green()
    );
    Ok(())
}
