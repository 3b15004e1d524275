//! Repository snapshot: the aggregated record and how it is derived

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

mod aggregator;
mod counter;
mod reference;

pub use aggregator::{AggregateOptions, Aggregator};
pub use reference::RepoRef;

/// Aggregated metadata for one repository.
///
/// Built fresh per invocation and never partially populated: any fatal error
/// during aggregation discards the whole record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositorySnapshot {
    pub name: String,
    pub owner: String,
    /// Empty when the repository has no description
    pub description: String,
    /// Empty when no license was detected
    pub license: String,
    pub created_at: DateTime<Utc>,
    pub stars: u64,
    pub forks: u64,
    #[serde(flatten)]
    pub samples: SampleSizes,
    pub languages: BTreeSet<String>,
    /// Author date of the newest commit on the default branch
    pub last_commit_at: Option<DateTime<Utc>>,
    pub age_days: u64,
    pub activity_link: String,
}

/// Element counts from the first page of each list endpoint.
///
/// These are samples, not totals: the API pages its lists and only the first
/// page is read. `issues` includes pull requests, as the issues endpoint does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SampleSizes {
    pub branches: usize,
    pub contributors: usize,
    pub commits: usize,
    pub files: usize,
    pub releases: usize,
    pub workflows: usize,
    pub issues: usize,
    pub pulls: usize,
}

/// Whole days elapsed between `created_at` and `now`, rounded down.
///
/// A creation time in the future (clock skew) yields 0.
pub fn age_in_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let hours = now.signed_duration_since(created_at).num_hours();
    u64::try_from(hours / 24).unwrap_or(0)
}

/// Link to the code-frequency graph of a repository
pub fn activity_link(web_host: &str, repo: &RepoRef) -> String {
    format!(
        "{}/{}/{}/graphs/code-frequency",
        web_host.trim_end_matches('/'),
        repo.owner,
        repo.name
    )
}
