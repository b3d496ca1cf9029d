//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific
//! modules.

mod analyze;
mod merge;
mod print;
mod rename;
mod tools;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::usage::UsageStore;

#[derive(Parser)]
#[command(name = "pdfdeck")]
#[command(about = "PDF management and content-based renaming tool")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a document: dates, known names, organizations, suggested filename
    Analyze {
        /// PDF file to analyze
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest a content-based filename, and optionally apply it
    Rename {
        /// PDF file to rename
        file: PathBuf,
        /// Use this name instead of the synthesized suggestion
        #[arg(short, long)]
        name: Option<String>,
        /// Perform the rename (default is suggestion only)
        #[arg(long)]
        apply: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Merge PDFs into a single file, pages in load order
    Merge {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
        /// PDF files to merge
        files: Vec<PathBuf>,
    },

    /// Print a PDF via the system spooler
    Print {
        /// PDF file to print
        file: PathBuf,
    },

    /// Check availability of external tools and the entity recognizer
    Tools,
}

/// Run the CLI.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    let mut usage = UsageStore::load(&settings.usage_path());

    match cli.command {
        Commands::Analyze { file, json } => {
            usage.record("analyze");
            analyze::cmd_analyze(&settings, &file, json)
        }
        Commands::Rename {
            file,
            name,
            apply,
            json,
        } => {
            usage.record("rename");
            rename::cmd_rename(&settings, &file, name.as_deref(), apply, json)
        }
        Commands::Merge { output, files } => {
            usage.record("merge");
            merge::cmd_merge(&settings, &output, &files)
        }
        Commands::Print { file } => {
            usage.record("print");
            print::cmd_print(&file)
        }
        Commands::Tools => tools::cmd_tools(&settings),
    }
}
