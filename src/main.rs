//! reposnap - descriptive and activity metadata for a GitHub repository

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod snapshot;

use cli::{Cli, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);
    cli::snapshot::run(&opts, &cli.repository).await
}

/// Log to stderr; `RUST_LOG` wins over `--debug`
fn init_logging(debug: bool) {
    let default_filter = if debug { "reposnap=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
