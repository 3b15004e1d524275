//! Mock GitHub API client for testing
//!
//! Provides a path-keyed implementation of [`RepoApi`] for unit testing
//! without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::RepoApi;
use crate::error::{ApiError, Result};

/// Canned outcome for one path
#[derive(Debug, Clone)]
enum MockResponse {
    Json(Value),
    Status(u16, String),
    Network(String),
    Malformed,
}

/// Mock API client for testing.
///
/// Configure responses per path via builder methods. Paths without a
/// configured response answer with HTTP 404.
///
/// # Example
/// ```ignore
/// let mock = MockGitHubClient::new()
///     .with_json("/repos/acme/widgets/branches", json!([{}, {}]));
///
/// let branches = mock.fetch("/repos/acme/widgets/branches").await?;
/// ```
#[derive(Default)]
pub struct MockGitHubClient {
    responses: HashMap<String, MockResponse>,
    /// Paths requested, in arrival order
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGitHubClient {
    /// Create an empty mock client
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with a 200 and the given JSON body
    pub fn with_json(mut self, path: &str, body: Value) -> Self {
        self.responses
            .insert(path.to_string(), MockResponse::Json(body));
        self
    }

    /// Answer `path` with a non-200 status
    pub fn with_status(mut self, path: &str, status: u16, message: &str) -> Self {
        self.responses.insert(
            path.to_string(),
            MockResponse::Status(status, message.to_string()),
        );
        self
    }

    /// Fail `path` at the transport level
    pub fn with_network_error(mut self, path: &str) -> Self {
        self.responses.insert(
            path.to_string(),
            MockResponse::Network("Connection refused".to_string()),
        );
        self
    }

    /// Answer `path` with a 200 whose body is not JSON
    pub fn with_malformed_body(mut self, path: &str) -> Self {
        self.responses
            .insert(path.to_string(), MockResponse::Malformed);
        self
    }

    /// Paths requested so far
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    /// Number of requests made for `path`
    pub async fn call_count(&self, path: &str) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|p| p.as_str() == path)
            .count()
    }
}

#[async_trait]
impl RepoApi for MockGitHubClient {
    async fn fetch(&self, path: &str) -> Result<Value> {
        self.calls.lock().await.push(path.to_string());

        match self.responses.get(path) {
            Some(MockResponse::Json(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status, message)) => Err(ApiError::Upstream {
                status: *status,
                message: message.clone(),
            }
            .into()),
            Some(MockResponse::Network(msg)) => Err(ApiError::Network(msg.clone()).into()),
            Some(MockResponse::Malformed) => Err(ApiError::InvalidResponse(format!(
                "Failed to parse response from {}",
                path
            ))
            .into()),
            None => Err(ApiError::Upstream {
                status: 404,
                message: "Not Found".to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[tokio::test]
    async fn test_configured_json() {
        let mock = MockGitHubClient::new().with_json("/a", json!([1, 2]));
        assert_eq!(mock.fetch("/a").await.unwrap(), json!([1, 2]));
        assert_eq!(mock.call_count("/a").await, 1);
    }

    #[tokio::test]
    async fn test_unconfigured_path_is_404() {
        let mock = MockGitHubClient::new();
        let err = mock.fetch("/missing").await.unwrap_err();
        assert!(matches!(
            err,
            Error::Api(ApiError::Upstream { status: 404, .. })
        ));
        assert_eq!(mock.calls().await, vec!["/missing".to_string()]);
    }

    #[tokio::test]
    async fn test_network_error() {
        let mock = MockGitHubClient::new().with_network_error("/a");
        let err = mock.fetch("/a").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Network(_))));
    }
}
