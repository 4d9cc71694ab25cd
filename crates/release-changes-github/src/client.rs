// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! GitHub REST API client
//!
//! [`CommitSource`] is the seam between the aggregation pipeline and the
//! remote API. [`GitHubClient`] implements it over `reqwest`; tests provide
//! their own implementations.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::commit::RawCommit;
use crate::error::GitHubError;
use crate::repository::RepositoryRef;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = "release-changes";
const ACCEPT: &str = "application/vnd.github+json";

/// Source of commit history for a repository
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// List commits on `branch` of `repository` committed at or after `since`
    ///
    /// Only the first page the API returns is considered.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError` if the commits cannot be retrieved.
    async fn list_commits(
        &self,
        repository: &RepositoryRef,
        branch: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<RawCommit>, GitHubError>;
}

/// Error body returned by the GitHub API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Authenticated GitHub API client
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: String,
    timeout: Option<Duration>,
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GitHubClient {
    /// Create a client for the public GitHub API
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
            timeout: None,
        }
    }

    /// Use a different API endpoint (GitHub Enterprise, mock servers)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound the duration of each request
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The API endpoint in use
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn commits_url(&self, repository: &RepositoryRef) -> String {
        format!(
            "{}/repos/{}/{}/commits",
            self.base_url, repository.organization, repository.name
        )
    }
}

#[async_trait]
impl CommitSource for GitHubClient {
    async fn list_commits(
        &self,
        repository: &RepositoryRef,
        branch: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<RawCommit>, GitHubError> {
        let since = since.to_rfc3339_opts(SecondsFormat::Secs, true);
        debug!(%repository, branch, %since, "Listing commits");

        let mut request = self
            .http
            .get(self.commits_url(repository))
            .query(&[("sha", branch), ("since", since.as_str())])
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT)
            .bearer_auth(&self.token);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GitHubError::RateLimited);
        }

        if status == StatusCode::FORBIDDEN
            && let Some(remaining) = response.headers().get("X-RateLimit-Remaining")
            && remaining.to_str().ok().and_then(|r| r.parse::<u32>().ok()) == Some(0)
        {
            return Err(GitHubError::RateLimited);
        }

        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|error| error.message)
                .unwrap_or(body);
            return Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let commits: Vec<RawCommit> = serde_json::from_str(&body)?;
        debug!(%repository, count = commits.len(), "Listed commits");
        Ok(commits)
    }
}
