//! depviz CLI binary.
//!
//! This is the entry point for the `depviz` command-line tool. It parses
//! arguments with `clap`, initializes logging via `tracing`, and
//! dispatches to the appropriate command handler.

mod cli;
mod commands;

use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::parse();

    // Logs go to stderr so `export --output -` keeps stdout clean.
    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::dispatch(args).await
}
