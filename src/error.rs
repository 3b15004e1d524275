//! Error types for reposnap

use thiserror::Error;

/// Result type alias for reposnap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid repository reference '{0}': expected a URL or owner/name")]
    InvalidReference(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{}", upstream_message(.status, .message))]
    Upstream { status: u16, message: String },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("No commits found in {0}")]
    NoCommitsFound(String),

    #[error("Malformed commit timestamp: {0}")]
    MalformedTimestamp(String),
}

impl ApiError {
    /// HTTP status of an upstream failure, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the API refused the request because of credentials or rate limits.
    ///
    /// These are never degraded to a default value: every further request
    /// would fail the same way.
    pub fn is_access_denied(&self) -> bool {
        matches!(self.status(), Some(401 | 403 | 429))
    }
}

fn upstream_message(status: &u16, message: &str) -> String {
    let detail = if message.is_empty() {
        String::new()
    } else {
        format!(": {}", message)
    };

    match status {
        401 => format!(
            "Authentication failed (HTTP 401){}. Check the access token.",
            detail
        ),
        403 | 429 => format!(
            "Access denied or rate limit exceeded (HTTP {}){}. Supply a token or wait for the limit to reset.",
            status, detail
        ),
        404 => format!("Repository or resource not found (HTTP 404){}", detail),
        _ => format!("Unexpected API response (HTTP {}){}", status, detail),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
