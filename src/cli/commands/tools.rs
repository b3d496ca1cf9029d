//! Tool availability check.

use console::style;

use crate::analyze::Analyzer;
use crate::config::Settings;
use crate::pdf::text::check_binary;
use crate::pdf::TextExtractor;

pub fn cmd_tools(settings: &Settings) -> anyhow::Result<()> {
    println!("\n{}", style("Tool Status").bold());
    println!("{}", "-".repeat(50));

    println!("\n{}", style("PDF Tools (poppler-utils):").cyan());
    for (tool, available) in TextExtractor::check_tools() {
        let status = if available {
            style("✓ found").green()
        } else {
            style("✗ not found").red()
        };
        println!("  {:<15} {}", tool, status);
    }

    println!("\n{}", style("Print Spooler:").cyan());
    for tool in ["lpr", "lp"] {
        let status = if check_binary(tool) {
            style("✓ found").green()
        } else {
            style("✗ not found").red()
        };
        println!("  {:<15} {}", tool, status);
    }

    println!("\n{}", style("Entity Recognizer:").cyan());
    match settings.recognizer.command.as_deref() {
        None => {
            println!(
                "  {:<15} {}",
                "(none)",
                style("not configured, provider table only").dim()
            );
        }
        Some(command) => {
            let analyzer = Analyzer::new(settings.clone());
            let status = if analyzer.recognizer_available() {
                style("✓ available").green()
            } else {
                style("✗ not available").red()
            };
            println!("  {:<15} {}", command, status);
        }
    }

    println!();
    Ok(())
}
