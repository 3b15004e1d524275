//! Fan-out aggregation of repository metadata
//!
//! The primary description is fetched first because the derived fields need
//! its creation time. The list counts, the language map and the last-commit
//! lookup are independent of each other and run concurrently afterwards.
//!
//! Failure policy:
//! - primary description, languages, last commit: any error is fatal
//! - list counts: degrade to 0, except 401/403/429 (always fatal) and
//!   transport failures (fatal unless `tolerate_transport_errors` is set)

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use super::counter::{count_elements, count_workflows};
use super::{RepoRef, RepositorySnapshot, SampleSizes, activity_link, age_in_days};
use crate::client::models::{CommitEntry, LanguageBytes, RepoDescription};
use crate::client::{RepoApi, Resource, fetch_concurrently};
use crate::config::DEFAULT_WEB_HOST;
use crate::error::{ApiError, Error, Result};

/// Knobs for one aggregation run
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Maximum list-count requests in flight at once
    pub max_concurrent: usize,
    /// Count a list as 0 when its request fails at the transport level
    pub tolerate_transport_errors: bool,
    /// Web host used for the activity-graph link
    pub web_host: String,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            max_concurrent: Resource::SAMPLED.len(),
            tolerate_transport_errors: false,
            web_host: DEFAULT_WEB_HOST.to_string(),
        }
    }
}

/// Builds a [`RepositorySnapshot`] from the individual API resources
pub struct Aggregator<C> {
    client: Arc<C>,
    options: AggregateOptions,
}

impl<C: RepoApi> Aggregator<C> {
    pub fn new(client: Arc<C>, options: AggregateOptions) -> Self {
        Self { client, options }
    }

    /// Aggregate a snapshot, deriving the age from the current time
    pub async fn snapshot(&self, reference: &str) -> Result<RepositorySnapshot> {
        self.snapshot_at(reference, Utc::now()).await
    }

    /// Aggregate a snapshot, deriving the age relative to `now`
    pub async fn snapshot_at(
        &self,
        reference: &str,
        now: DateTime<Utc>,
    ) -> Result<RepositorySnapshot> {
        let repo = RepoRef::parse(reference)?;
        debug!("Aggregating snapshot for {}", repo);

        let description = self.describe(&repo).await?;

        let (samples, languages, last_commit_at) = futures::try_join!(
            self.sample_sizes(&repo),
            self.languages(&repo),
            self.last_commit(&repo),
        )?;

        Ok(RepositorySnapshot {
            name: description.name,
            owner: description.owner.login,
            description: description.description.unwrap_or_default(),
            license: description
                .license
                .map(|license| license.name)
                .unwrap_or_default(),
            created_at: description.created_at,
            stars: description.stargazers_count,
            forks: description.forks_count,
            samples,
            languages,
            last_commit_at,
            age_days: age_in_days(description.created_at, now),
            activity_link: activity_link(&self.options.web_host, &repo),
        })
    }

    /// Fetch and decode the primary repository description
    async fn describe(&self, repo: &RepoRef) -> Result<RepoDescription> {
        let body = self.client.fetch(&Resource::Repository.path(repo)).await?;
        let description = serde_json::from_value(body).map_err(|e| {
            ApiError::InvalidResponse(format!("Malformed repository description: {}", e))
        })?;
        Ok(description)
    }

    /// Language names used in the repository
    async fn languages(&self, repo: &RepoRef) -> Result<BTreeSet<String>> {
        let body = self.client.fetch(&Resource::Languages.path(repo)).await?;
        let languages: LanguageBytes = serde_json::from_value(body)
            .map_err(|e| ApiError::InvalidResponse(format!("Malformed languages map: {}", e)))?;
        Ok(languages.into_keys().collect())
    }

    /// Author date of the first commit on the first commits page
    async fn last_commit(&self, repo: &RepoRef) -> Result<Option<DateTime<Utc>>> {
        let body = match self.client.fetch(&Resource::Commits.path(repo)).await {
            Ok(body) => body,
            // GitHub answers 409 for a repository without any commits
            Err(Error::Api(ApiError::Upstream { status: 409, .. })) => {
                return Err(ApiError::NoCommitsFound(repo.to_string()).into());
            }
            Err(err) => return Err(err),
        };

        let commits: Vec<CommitEntry> = serde_json::from_value(body)
            .map_err(|e| ApiError::InvalidResponse(format!("Malformed commit list: {}", e)))?;

        let first = commits
            .first()
            .ok_or_else(|| ApiError::NoCommitsFound(repo.to_string()))?;

        match first.author_date() {
            Some(date) => {
                let parsed = DateTime::parse_from_rfc3339(date)
                    .map_err(|_| ApiError::MalformedTimestamp(date.to_string()))?;
                Ok(Some(parsed.with_timezone(&Utc)))
            }
            None => {
                debug!("Newest commit in {} has no author date", repo);
                Ok(None)
            }
        }
    }

    /// Count the first page of every sampled list resource
    async fn sample_sizes(&self, repo: &RepoRef) -> Result<SampleSizes> {
        let settled = fetch_concurrently(
            Resource::SAMPLED.to_vec(),
            |resource| self.sample_size(repo, resource),
            self.options.max_concurrent,
        )
        .await?;

        let mut samples = SampleSizes::default();
        for (resource, count) in settled {
            let slot = match resource {
                Resource::Branches => &mut samples.branches,
                Resource::Contributors => &mut samples.contributors,
                Resource::Commits => &mut samples.commits,
                Resource::Contents => &mut samples.files,
                Resource::Releases => &mut samples.releases,
                Resource::Workflows => &mut samples.workflows,
                Resource::Issues => &mut samples.issues,
                Resource::Pulls => &mut samples.pulls,
                Resource::Repository | Resource::Languages => continue,
            };
            *slot = count;
        }

        Ok(samples)
    }

    async fn sample_size(&self, repo: &RepoRef, resource: Resource) -> Result<usize> {
        match self.client.fetch(&resource.path(repo)).await {
            Ok(body) => {
                let count = match resource {
                    Resource::Workflows => count_workflows(&body),
                    _ => count_elements(&body),
                };
                debug!("{} sample size: {}", resource.name(), count);
                Ok(count)
            }
            Err(err) => self.degrade(resource, err),
        }
    }

    /// Decide whether a failed list count aborts the run or counts as 0
    fn degrade(&self, resource: Resource, err: Error) -> Result<usize> {
        let tolerable = match &err {
            Error::Api(api) if api.is_access_denied() => false,
            Error::Api(ApiError::Network(_)) => self.options.tolerate_transport_errors,
            Error::Api(_) => true,
            _ => false,
        };

        if tolerable {
            warn!("Counting {} as 0: {}", resource.name(), err);
            Ok(0)
        } else {
            Err(err)
        }
    }
}
