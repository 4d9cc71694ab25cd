// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Per-repository commit retrieval with failure isolation

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::client::CommitSource;
use crate::commit::RawCommit;
use crate::error::GitHubError;
use crate::repository::parse_repository;

/// Fetch the commits of one repository reference
///
/// API failures (network, authentication, missing repository, rate limit)
/// are logged with the reference and produce an empty list, so one broken
/// repository never aborts an audit of the others. There is no retry.
///
/// # Errors
///
/// Returns `GitHubError::RepositoryResolution` if `reference` cannot be split
/// into organization and name.
pub async fn fetch_commits<S>(
    source: &S,
    reference: &str,
    branch: &str,
    since: DateTime<Utc>,
) -> Result<Vec<RawCommit>, GitHubError>
where
    S: CommitSource + ?Sized,
{
    let repository =
        parse_repository(reference).ok_or_else(|| GitHubError::RepositoryResolution {
            reference: reference.to_string(),
        })?;

    match source.list_commits(&repository, branch, since).await {
        Ok(commits) => Ok(commits),
        Err(e) => {
            warn!("[{reference}] {e}");
            Ok(Vec::new())
        }
    }
}
