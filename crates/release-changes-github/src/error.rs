// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for release-changes-github

use thiserror::Error;

/// Errors that can occur while retrieving commits for one repository
///
/// None of these abort a run: the affected repository contributes no
/// changes and the remaining repositories are still processed.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The reference could not be split into organization and name
    #[error("Unable to parse repository organization or name: {reference:?}")]
    RepositoryResolution {
        /// The reference that failed to parse
        reference: String,
    },

    /// Network or transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("GitHub API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message returned by the API, or the raw body
        message: String,
    },

    /// The API rate limit is exhausted
    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    /// The response body was not the expected JSON
    #[error("Failed to parse JSON response: {0}")]
    JsonParse(#[from] serde_json::Error),
}
