//! Global CLI options
//!
//! Captures the CLI/env layer of every setting. Config file values and
//! defaults are applied later in `CommandContext`, giving the precedence
//! CLI flag > environment variable > config file > default.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to command handlers.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.reposnap/config.yaml)
    pub config: Option<String>,

    /// Access token
    pub token: Option<String>,

    /// Custom API host for GitHub Enterprise or testing
    pub api_host: Option<String>,

    /// Custom web host for report links
    pub web_host: Option<String>,

    /// Degrade list counts on network failures
    pub tolerant: bool,

    /// Hide the progress spinner
    pub no_progress: bool,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            token: cli.token.clone(),
            api_host: cli.api_host.clone(),
            web_host: cli.web_host.clone(),
            tolerant: cli.tolerant,
            no_progress: cli.no_progress,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get the token, treating an empty string as absent.
    pub fn token_ref(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}
