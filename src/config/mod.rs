//! Configuration management for reposnap

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Default GitHub REST API host
pub const DEFAULT_API_HOST: &str = "https://api.github.com";

/// Default GitHub web host, used for links shown in the report
pub const DEFAULT_WEB_HOST: &str = "https://github.com";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub access token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// REST API host (GitHub Enterprise or a test server)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Web host used to build report links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_host: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Transport timeout per request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of auxiliary requests in flight at once
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// Degrade auxiliary counts to zero on network failures instead of aborting
    #[serde(default)]
    pub tolerate_transport_errors: bool,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_concurrent() -> usize {
    10
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            timeout_secs: default_timeout_secs(),
            max_concurrent: default_max_concurrent(),
            tolerate_transport_errors: false,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".reposnap").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or from the default location.
    ///
    /// A missing file at the default location yields the default configuration;
    /// a missing file that was asked for by name is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(PathBuf::from(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values that would make every request fail
    pub fn validate(&self) -> Result<()> {
        if self.preferences.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be greater than 0".to_string()).into());
        }
        if self.preferences.max_concurrent == 0 {
            return Err(
                ConfigError::Invalid("max_concurrent must be greater than 0".to_string()).into(),
            );
        }
        Ok(())
    }

    /// Configured token, treating an empty string as absent
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// API host, falling back to the public GitHub API
    pub fn api_host(&self) -> &str {
        self.api_host.as_deref().unwrap_or(DEFAULT_API_HOST)
    }

    /// Web host, falling back to github.com
    pub fn web_host(&self) -> &str {
        self.web_host.as_deref().unwrap_or(DEFAULT_WEB_HOST)
    }
}
