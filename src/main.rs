//! Speech Kanban CLI
//!
//! Terminal front end for the speech-technology board.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::Cli;

/// Logs go to stderr so board output on stdout stays clean
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "speech_kanban=debug"
    } else {
        "speech_kanban=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli::execute(cli).await
}
