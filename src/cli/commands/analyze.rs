//! Document analysis command.

use std::path::Path;

use console::style;

use crate::analyze::Analyzer;
use crate::config::Settings;

pub fn cmd_analyze(settings: &Settings, file: &Path, json: bool) -> anyhow::Result<()> {
    let analyzer = Analyzer::new(settings.clone());
    let result = analyzer.analyze(file);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("\n{}", style(file.display().to_string()).bold());
    println!("{}", "-".repeat(50));

    print_list("Dates", &result.dates);
    print_list("Names", &result.names);
    print_list("Organizations", &result.organizations);

    println!(
        "\n{} {}",
        style("Suggested name:").cyan(),
        style(&result.suggested_name).green()
    );
    Ok(())
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        println!("  {:<15} {}", label, style("none found").dim());
    } else {
        println!("  {:<15} {}", label, items.join(", "));
    }
}
