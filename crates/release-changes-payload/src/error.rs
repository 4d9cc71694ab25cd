// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for release-changes-payload

use thiserror::Error;

/// Errors that can occur while resolving a release payload to repositories
///
/// Every variant is fatal for a run: without the repository list there is
/// nothing to audit.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The release-inspection program could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// The program that was invoked
        program: String,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The release-inspection program exited unsuccessfully
    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        /// The program that was invoked
        program: String,
        /// Exit status as reported by the OS
        status: std::process::ExitStatus,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The release metadata was not valid JSON of the expected shape
    #[error("Malformed release metadata: {0}")]
    JsonParse(#[from] serde_json::Error),
}
