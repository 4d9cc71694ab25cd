// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! release-changes-github: GitHub commit history retrieval for release-changes
//!
//! This library crate lists recent commits of GitHub repositories and turns
//! them into cleaned-up, report-ready changes.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use chrono::{Duration, Utc};
//! use release_changes_github::{GitHubClient, fetch_commits, filter_commits};
//!
//! # async fn example() {
//! let client = GitHubClient::new("ghp_token");
//! let reference = "https://github.com/openshift/installer";
//! let since = Utc::now() - Duration::days(1);
//!
//! if let Ok(commits) = fetch_commits(&client, reference, "master", since).await {
//!     for change in filter_commits(reference, &commits, Utc::now()) {
//!         println!("{} {}", change.display_time, change.message);
//!     }
//! }
//! # }
//! ```

pub mod client;
pub mod commit;
pub mod error;
pub mod fetch;
pub mod humanize;
pub mod repository;

pub use client::{CommitSource, DEFAULT_API_URL, GitHubClient};
pub use commit::{Change, RawCommit, filter_commits, is_merge_commit, sanitize_message};
pub use error::GitHubError;
pub use fetch::fetch_commits;
pub use humanize::relative_time;
pub use repository::{RepositoryRef, parse_repository};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::{CommitSource, GitHubClient};
    pub use crate::commit::{Change, RawCommit, filter_commits};
    pub use crate::error::GitHubError;
    pub use crate::fetch::fetch_commits;
    pub use crate::repository::{RepositoryRef, parse_repository};
}
