//! pdfdeck - PDF management and content-based renaming.
//!
//! Load PDF documents, reorder and merge their pages, print them, and
//! rename them from content extracted off their first pages.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pdfdeck::cli;

fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if cli::is_verbose() {
        "pdfdeck=info"
    } else {
        "pdfdeck=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    cli::run()
}
