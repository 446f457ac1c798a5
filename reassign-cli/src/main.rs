//! reassign-reviewer - re-request review from a past reviewer or commenter
//!
//! GitHub refuses to re-request a review from someone who already submitted
//! one through the UI's reviewer list; this tool sends the request directly.

mod commands;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::ReassignArgs;

/// Re-request review from a past reviewer or commenter on a pull request
#[derive(Parser, Debug)]
#[command(name = "reassign-reviewer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    reassign: ReassignArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        "reassign_cli=debug,reassign_core=debug,reassign_github=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    cli.reassign.execute().await
}
