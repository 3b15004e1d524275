//! Response schemas for the GitHub endpoints the aggregator reads
//!
//! Only the fields that are actually used are modelled. Endpoints that are
//! merely counted are decoded as lists of opaque elements.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::IgnoredAny;

/// Primary repository description (`GET /repos/{owner}/{repo}`)
#[derive(Debug, Clone, Deserialize)]
pub struct RepoDescription {
    /// Repository name
    pub name: String,

    /// Owning account
    pub owner: Owner,

    /// Free-text description, null when unset
    #[serde(default)]
    pub description: Option<String>,

    /// Detected license, null when none was detected
    #[serde(default)]
    pub license: Option<License>,

    /// Creation time
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub stargazers_count: u64,

    #[serde(default)]
    pub forks_count: u64,
}

/// Repository owner
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// Repository license
#[derive(Debug, Clone, Deserialize)]
pub struct License {
    #[serde(default)]
    pub name: String,
}

/// Language name to byte count (`GET /repos/{owner}/{repo}/languages`)
pub type LanguageBytes = BTreeMap<String, u64>;

/// A list whose elements are only counted
pub type OpaqueList = Vec<IgnoredAny>;

/// Workflow page (`GET /repos/{owner}/{repo}/actions/workflows`)
#[derive(Debug, Deserialize)]
pub struct WorkflowPage {
    pub workflows: OpaqueList,
}

/// Commit list element (`GET /repos/{owner}/{repo}/commits`)
#[derive(Debug, Clone, Deserialize)]
pub struct CommitEntry {
    pub commit: CommitDetail,
}

/// Git-level commit data
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    /// Author signature, null for some imported commits
    #[serde(default)]
    pub author: Option<Signature>,
}

/// Git author signature
#[derive(Debug, Clone, Deserialize)]
pub struct Signature {
    /// Author date as sent by the API; parsed by the caller
    #[serde(default)]
    pub date: Option<String>,
}

impl CommitEntry {
    /// Author date string, if the API supplied one
    pub fn author_date(&self) -> Option<&str> {
        self.commit
            .author
            .as_ref()
            .and_then(|author| author.date.as_deref())
    }
}
