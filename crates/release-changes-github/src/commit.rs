// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit types and message filtering
//!
//! [`RawCommit`] is a commit as returned by the GitHub API. [`filter_commits`]
//! drops merge commits and turns the rest into report-ready [`Change`]s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::humanize::relative_time;

/// Maximum characters kept from a single message line
pub const MAX_LINE_CHARS: usize = 80;

/// Appended to a line that was cut at [`MAX_LINE_CHARS`]
pub const TRUNCATION_MARKER: &str = " ...";

const MERGE_MARKER: &str = "Merge pull request";
const SIGNATURE_MARKER: &str = "Signed-off-by";

/// A commit as listed by the GitHub API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "wire::RepositoryCommit")]
pub struct RawCommit {
    /// The commit SHA
    pub sha: String,
    /// Link to the commit on github.com
    pub html_url: String,
    /// Full commit message
    pub message: String,
    /// Committer timestamp
    pub committed_at: DateTime<Utc>,
}

impl RawCommit {
    /// Check if this looks like a pull request merge commit
    #[must_use]
    pub fn is_merge(&self) -> bool {
        is_merge_commit(&self.message)
    }
}

/// JSON shape of `GET /repos/{owner}/{repo}/commits` entries
mod wire {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct RepositoryCommit {
        #[serde(default)]
        pub sha: String,
        #[serde(default)]
        pub html_url: String,
        pub commit: GitCommit,
    }

    #[derive(Deserialize)]
    pub struct GitCommit {
        #[serde(default)]
        pub message: String,
        #[serde(default)]
        pub committer: Option<Signature>,
        #[serde(default)]
        pub author: Option<Signature>,
    }

    #[derive(Deserialize)]
    pub struct Signature {
        pub date: DateTime<Utc>,
    }
}

impl From<wire::RepositoryCommit> for RawCommit {
    fn from(entry: wire::RepositoryCommit) -> Self {
        let committed_at = entry
            .commit
            .committer
            .or(entry.commit.author)
            .map(|signature| signature.date)
            .unwrap_or_default();
        Self {
            sha: entry.sha,
            html_url: entry.html_url,
            message: entry.commit.message,
            committed_at,
        }
    }
}

/// A reportable change: one non-merge commit with a cleaned-up message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    /// Link to the commit
    pub url: String,
    /// Sanitized commit message
    pub message: String,
    /// Human-relative commit time, e.g. "3 hours ago"
    #[serde(rename = "when")]
    pub display_time: String,
    /// Committer timestamp used for ordering
    #[serde(rename = "time")]
    pub original_time: DateTime<Utc>,
    /// Repository reference the commit came from
    pub repository: String,
}

impl Change {
    /// Build a change from a raw commit, rendering its time relative to `now`
    #[must_use]
    pub fn from_commit(repository: &str, commit: &RawCommit, now: DateTime<Utc>) -> Self {
        Self {
            url: commit.html_url.clone(),
            message: sanitize_message(&commit.message),
            display_time: relative_time(commit.committed_at, now),
            original_time: commit.committed_at,
            repository: repository.to_string(),
        }
    }
}

/// Check if a commit message is a pull request merge
///
/// This is a heuristic: true iff the message contains `Merge pull request`
/// (case-sensitive). It needs no extra API call but misses merges with other
/// messages.
#[must_use]
pub fn is_merge_commit(message: &str) -> bool {
    message.contains(MERGE_MARKER)
}

/// Clean up a commit message for tabular display
///
/// Drops `Signed-off-by` lines and blank lines, cuts lines longer than
/// [`MAX_LINE_CHARS`] characters and marks them with [`TRUNCATION_MARKER`],
/// trims every kept line, and joins them with `\n`.
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    message
        .split('\n')
        .filter(|line| !line.contains(SIGNATURE_MARKER) && !line.trim().is_empty())
        .map(|line| match line.char_indices().nth(MAX_LINE_CHARS) {
            Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &line[..cut])
                .trim()
                .to_string(),
            None => line.trim().to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turn the commits of one repository into changes, skipping merges
#[must_use]
pub fn filter_commits(repository: &str, commits: &[RawCommit], now: DateTime<Utc>) -> Vec<Change> {
    commits
        .iter()
        .filter(|commit| !commit.is_merge())
        .map(|commit| Change::from_commit(repository, commit, now))
        .collect()
}
