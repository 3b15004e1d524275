//! GitHub REST API client

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::snapshot::RepoRef;

pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod parallel;

pub use github::GitHubClient;
#[cfg(test)]
pub use mock::MockGitHubClient;
pub use parallel::fetch_concurrently;

/// Resource fetcher trait.
///
/// One call is one GET against a path relative to the API host. Implementations
/// must not retry; the aggregator decides which failures are fatal.
#[async_trait]
pub trait RepoApi: Send + Sync {
    /// Fetch a resource and return its decoded JSON body
    async fn fetch(&self, path: &str) -> Result<Value>;
}

/// Repository-scoped API resources read by the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Primary repository description
    Repository,
    Branches,
    Contributors,
    Commits,
    /// Top-level file listing
    Contents,
    Languages,
    Releases,
    Workflows,
    /// Issues, which upstream also returns pull requests in
    Issues,
    Pulls,
}

impl Resource {
    /// Auxiliary resources whose first page is only counted
    pub const SAMPLED: [Resource; 8] = [
        Resource::Branches,
        Resource::Contributors,
        Resource::Commits,
        Resource::Contents,
        Resource::Releases,
        Resource::Workflows,
        Resource::Issues,
        Resource::Pulls,
    ];

    /// API path for this resource in the given repository
    pub fn path(&self, repo: &RepoRef) -> String {
        let base = format!("/repos/{}/{}", repo.owner, repo.name);
        match self.suffix() {
            Some(suffix) => format!("{}/{}", base, suffix),
            None => base,
        }
    }

    fn suffix(&self) -> Option<&'static str> {
        match self {
            Resource::Repository => None,
            Resource::Branches => Some("branches"),
            Resource::Contributors => Some("contributors"),
            Resource::Commits => Some("commits"),
            Resource::Contents => Some("contents"),
            Resource::Languages => Some("languages"),
            Resource::Releases => Some("releases"),
            Resource::Workflows => Some("actions/workflows"),
            Resource::Issues => Some("issues"),
            Resource::Pulls => Some("pulls"),
        }
    }

    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        self.suffix().unwrap_or("repository")
    }
}
