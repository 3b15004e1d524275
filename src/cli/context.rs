//! Command execution context
//!
//! Merges CLI/env options with the config file and builds the API client.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;
use crate::snapshot::{AggregateOptions, Aggregator};

/// Context for command execution: API client and resolved runtime options.
pub struct CommandContext {
    /// API client (Arc-wrapped for concurrent fetches)
    pub client: Arc<GitHubClient>,
    /// Resolved output format
    pub format: OutputFormat,
    /// Resolved aggregation options
    pub options: AggregateOptions,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file cannot be loaded, names an unknown
    /// output format, or the HTTP client cannot be built.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;

        let format = match (opts.format, config.preferences.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(name)) => name.parse()?,
            (None, None) => OutputFormat::default(),
        };

        let token = opts.token_ref().or(config.token()).map(str::to_string);
        let api_host = opts
            .api_host
            .clone()
            .unwrap_or_else(|| config.api_host().to_string());
        let authenticated = token.is_some();

        let client = GitHubClient::with_host(
            token,
            Some(api_host),
            Duration::from_secs(config.preferences.timeout_secs),
        )?;
        debug!(
            "Using API host {} ({})",
            client.base_url(),
            if authenticated {
                "authenticated"
            } else {
                "anonymous"
            }
        );

        let options = AggregateOptions {
            max_concurrent: config.preferences.max_concurrent,
            tolerate_transport_errors: opts.tolerant
                || config.preferences.tolerate_transport_errors,
            web_host: opts
                .web_host
                .clone()
                .unwrap_or_else(|| config.web_host().to_string()),
        };

        Ok(Self {
            client: Arc::new(client),
            format,
            options,
        })
    }

    /// Aggregator bound to this context's client and options
    pub fn aggregator(&self) -> Aggregator<GitHubClient> {
        Aggregator::new(self.client.clone(), self.options.clone())
    }
}
