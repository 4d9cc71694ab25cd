// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for release-changes
//!
//! This module provides the command-line configuration, including the
//! payload to inspect, the commit window, GitHub access and logging options.

use std::num::NonZeroUsize;

use clap::{Parser, ValueEnum};
use release_changes_github::DEFAULT_API_URL;

use crate::aggregate::ProcessOptions;

/// Payload inspected when none is given
pub const DEFAULT_PAYLOAD: &str = "quay.io/openshift-release-dev/ocp-release:4.9.0-fc.0-x86_64";

/// Repositories fetched in parallel when not overridden
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON array of changes
    Json,
}

/// Release Changes - audit recent commits across a release payload
#[derive(Parser, Debug, Clone)]
#[command(name = "release-changes")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Relative time to search the commits from (eg. '1d', '48h', ...)
    #[arg(long, default_value = "1d")]
    pub since: String,

    /// Branch name to use for search (eg. 'release-4.6', ...)
    #[arg(short, long, default_value = "master")]
    pub branch: String,

    /// Payload pull spec used to determine the list of repositories
    #[arg(short, long, default_value = DEFAULT_PAYLOAD)]
    pub payload: String,

    /// Maximum number of repositories fetched at the same time
    #[arg(short, long, env = "RELEASE_CHANGES_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Repository to audit instead of the payload's repositories
    ///
    /// May be repeated. When given, the payload is not inspected.
    #[arg(long = "repository", value_name = "URL")]
    pub repositories: Vec<String>,

    /// Release-inspection program used to read the payload
    #[arg(long, env = "OC_BINARY", default_value = "oc")]
    pub oc: String,

    /// GitHub API endpoint
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Build the options for a run
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `since` is not a valid duration
    /// - `branch` is empty
    /// - `concurrency` is zero
    pub fn process_options(&self) -> Result<ProcessOptions, ConfigError> {
        let since = humantime::parse_duration(self.since.trim()).map_err(|source| {
            ConfigError::InvalidDuration {
                value: self.since.clone(),
                source,
            }
        })?;

        let branch = self.branch.trim();
        if branch.is_empty() {
            return Err(ConfigError::EmptyBranch);
        }

        let concurrency =
            NonZeroUsize::new(self.concurrency).ok_or(ConfigError::InvalidConcurrency)?;

        Ok(ProcessOptions::new(concurrency, since, branch))
    }

    /// Get the GitHub token
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` if no non-blank token is configured.
    pub fn github_token(&self) -> Result<&str, ConfigError> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)
    }

    /// Startup line describing a run over `repositories` repositories
    ///
    /// The lookback is shown as given on the command line.
    #[must_use]
    pub fn run_summary(&self, repositories: usize) -> String {
        format!(
            "Processing {repositories} repositories for commits in {} branch, since {} ...",
            self.branch.trim(),
            self.since.trim()
        )
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The lookback could not be parsed
    #[error("Unable to parse duration {value:?}: {source}")]
    InvalidDuration {
        /// The rejected input
        value: String,
        /// Parser error
        #[source]
        source: humantime::DurationError,
    },

    /// Branch name is empty
    #[error("Branch name must not be empty")]
    EmptyBranch,

    /// Concurrency is zero
    #[error("Concurrency must be at least 1")]
    InvalidConcurrency,

    /// No GitHub token available
    #[error("GITHUB_TOKEN must be set in order to talk to GitHub")]
    MissingToken,
}
