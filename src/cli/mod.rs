//! CLI definition and handlers

use clap::Parser;

pub mod args;
pub mod context;
pub mod snapshot;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// reposnap - descriptive and activity metadata for a GitHub repository
#[derive(Parser, Debug)]
#[command(name = "reposnap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Repository URL or owner/name
    pub repository: String,

    /// GitHub access token (optional, raises the API rate limit)
    #[arg(env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        env = "REPOSNAP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, env = "REPOSNAP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// GitHub API host (GitHub Enterprise or a test server)
    #[arg(long, env = "REPOSNAP_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// GitHub web host used for report links
    #[arg(long, env = "REPOSNAP_WEB_HOST", hide_env = true)]
    pub web_host: Option<String>,

    /// Count a list as 0 instead of failing when its request hits a network error
    #[arg(long, env = "REPOSNAP_TOLERANT", hide_env = true)]
    pub tolerant: bool,

    /// Do not show the progress spinner
    #[arg(long, env = "REPOSNAP_NO_PROGRESS", hide_env = true)]
    pub no_progress: bool,

    /// Enable debug logging
    #[arg(long, env = "REPOSNAP_DEBUG", hide_env = true)]
    pub debug: bool,
}
