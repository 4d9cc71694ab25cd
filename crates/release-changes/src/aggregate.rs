// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Concurrent change aggregation
//!
//! This module fans commit retrieval out over every repository of a release,
//! with at most `concurrency` repositories in flight, and merges the results
//! into a single list ordered from oldest to newest.
//!
//! # Example
//!
//! ```no_run
//! use std::num::NonZeroUsize;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use release_changes::{ProcessOptions, aggregate};
//! use release_changes_github::GitHubClient;
//!
//! # async fn example() -> Result<(), release_changes::AggregateError> {
//! let source = Arc::new(GitHubClient::new("ghp_token"));
//! let options = ProcessOptions::new(
//!     NonZeroUsize::new(10).unwrap(),
//!     Duration::from_secs(86_400),
//!     "master",
//! );
//! let repositories = vec!["https://github.com/openshift/installer".to_string()];
//!
//! let changes = aggregate(source, &options, &repositories).await?;
//! println!("{} changes", changes.len());
//! # Ok(())
//! # }
//! ```

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use release_changes_github::{Change, CommitSource, fetch_commits, filter_commits};
use thiserror::Error;
use tokio::sync::{AcquireError, Mutex, Semaphore};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

// ============================================================================
// Error Types
// ============================================================================

/// Failures of the aggregation machinery itself
///
/// Per-repository failures never show up here; they are logged and the
/// repository contributes no changes.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// A worker task panicked or was cancelled
    #[error("Worker task failed: {0}")]
    Task(#[from] JoinError),

    /// The worker pool was shut down while tasks were waiting for a slot
    #[error("Worker pool closed: {0}")]
    PoolClosed(#[from] AcquireError),
}

// ============================================================================
// Options
// ============================================================================

/// Options for one aggregation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Maximum number of repositories fetched at the same time
    pub concurrency: NonZeroUsize,
    /// How far back from the start of the run to look for commits
    pub since: Duration,
    /// Branch whose history is listed
    pub branch: String,
}

impl ProcessOptions {
    /// Create options for a run
    #[must_use]
    pub fn new(concurrency: NonZeroUsize, since: Duration, branch: impl Into<String>) -> Self {
        Self {
            concurrency,
            since,
            branch: branch.into(),
        }
    }

    /// The earliest commit time included when the run starts at `now`
    ///
    /// A lookback reaching past the representable range starts at the
    /// earliest representable time.
    #[must_use]
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        chrono::Duration::from_std(self.since)
            .ok()
            .and_then(|since| now.checked_sub_signed(since))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Collect the changes of all `repositories`, oldest first
///
/// One task is spawned per repository; a semaphore admits at most
/// `options.concurrency` of them into the fetch at a time. Each task appends
/// its finished batch to a shared list under a lock held only for the append.
/// Changes with equal timestamps have no defined relative order.
///
/// # Errors
///
/// Returns `AggregateError` if a worker task fails or the pool shuts down.
/// No partial result is returned in that case.
pub async fn aggregate(
    source: Arc<dyn CommitSource>,
    options: &ProcessOptions,
    repositories: &[String],
) -> Result<Vec<Change>, AggregateError> {
    let since = options.cutoff(Utc::now());
    let permits = options.concurrency.get().min(Semaphore::MAX_PERMITS);
    let semaphore = Arc::new(Semaphore::new(permits));
    let changes = Arc::new(Mutex::new(Vec::new()));
    let mut tasks = JoinSet::new();

    for repository in repositories {
        let source = Arc::clone(&source);
        let semaphore = Arc::clone(&semaphore);
        let changes = Arc::clone(&changes);
        let repository = repository.clone();
        let branch = options.branch.clone();

        tasks.spawn(async move {
            let permit = semaphore.acquire_owned().await?;
            let local = repository_changes(source.as_ref(), &repository, &branch, since).await;
            drop(permit);

            changes.lock().await.extend(local);
            Ok::<_, AcquireError>(())
        });
    }

    // Dropping the set on error aborts the remaining tasks
    while let Some(joined) = tasks.join_next().await {
        joined??;
    }

    let mut changes = std::mem::take(&mut *changes.lock().await);
    changes.sort_unstable_by_key(|change| change.original_time);
    Ok(changes)
}

/// Fetch and filter one repository, absorbing every failure
async fn repository_changes(
    source: &dyn CommitSource,
    repository: &str,
    branch: &str,
    since: DateTime<Utc>,
) -> Vec<Change> {
    match fetch_commits(source, repository, branch, since).await {
        Ok(commits) => {
            let changes = filter_commits(repository, &commits, Utc::now());
            debug!(
                repository,
                commits = commits.len(),
                changes = changes.len(),
                "Processed repository"
            );
            changes
        }
        Err(e) => {
            warn!("[{repository}] {e}");
            Vec::new()
        }
    }
}
