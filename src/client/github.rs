//! GitHub API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::RepoApi;
use crate::config::DEFAULT_API_HOST;
use crate::error::{ApiError, Result};

/// Media type recommended by the GitHub REST API
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version pinned for every request
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client
///
/// Holds only read-only state, so one instance can serve concurrent fetches.
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client with a custom API host and transport timeout
    pub fn with_host(
        token: Option<String>,
        api_host: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let http = HttpClient::builder()
            .user_agent(concat!("reposnap/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = api_host
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            base_url,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Error body returned by the GitHub API
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

#[async_trait]
impl RepoApi for GitHubClient {
    async fn fetch(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        debug!("GET {} -> {}", path, status);

        if status == StatusCode::OK {
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;
            let data = serde_json::from_str(&body).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", path, e))
            })?;
            return Ok(data);
        }

        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .map(|body| body.message)
            .unwrap_or_default();

        Err(ApiError::Upstream {
            status: status.as_u16(),
            message,
        }
        .into())
    }
}
