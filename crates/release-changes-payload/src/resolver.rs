// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Payload resolvers
//!
//! A [`PayloadResolver`] turns a payload pull spec into repository references.
//! [`OcResolver`] shells out to the `oc` client; [`StaticResolver`] returns a
//! fixed list and is used when repositories are given explicitly.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::PayloadError;
use crate::release::repositories_from_json;

/// Default release-inspection program
pub const DEFAULT_OC_PROGRAM: &str = "oc";

/// Resolves a release payload into its source repositories
#[async_trait]
pub trait PayloadResolver: Send + Sync {
    /// Return the de-duplicated, ordered repository references of `payload`
    ///
    /// # Errors
    ///
    /// Returns `PayloadError` if the payload cannot be inspected.
    async fn resolve(&self, payload: &str) -> Result<Vec<String>, PayloadError>;
}

/// Resolver backed by `oc adm release info`
#[derive(Debug, Clone)]
pub struct OcResolver {
    program: String,
}

impl Default for OcResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl OcResolver {
    /// Create a resolver that runs `oc` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(DEFAULT_OC_PROGRAM)
    }

    /// Create a resolver that runs the given program instead of `oc`
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program this resolver invokes
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program for `payload`
    #[must_use]
    pub fn args(payload: &str) -> [&str; 7] {
        [
            "adm",
            "release",
            "info",
            payload,
            "--commit-urls",
            "-o",
            "json",
        ]
    }
}

#[async_trait]
impl PayloadResolver for OcResolver {
    async fn resolve(&self, payload: &str) -> Result<Vec<String>, PayloadError> {
        debug!(program = %self.program, payload, "Inspecting release payload");

        let output = Command::new(&self.program)
            .args(Self::args(payload))
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| PayloadError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PayloadError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let repositories = repositories_from_json(&stdout)?;
        debug!(count = repositories.len(), "Resolved payload repositories");
        Ok(repositories)
    }
}

/// Resolver that ignores the payload and returns a fixed repository list
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    repositories: Vec<String>,
}

impl StaticResolver {
    /// Create a resolver over the given references
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    #[must_use]
    pub fn new<I, S>(repositories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for repository in repositories {
            let repository = repository.into();
            if !repository.is_empty() && !unique.contains(&repository) {
                unique.push(repository);
            }
        }
        Self {
            repositories: unique,
        }
    }
}

#[async_trait]
impl PayloadResolver for StaticResolver {
    async fn resolve(&self, _payload: &str) -> Result<Vec<String>, PayloadError> {
        Ok(self.repositories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_oc_args() {
        assert_eq!(
            OcResolver::args("quay.io/x:1"),
            [
                "adm",
                "release",
                "info",
                "quay.io/x:1",
                "--commit-urls",
                "-o",
                "json"
            ]
        );
    }

    #[test]
    fn test_default_program() {
        assert_eq!(OcResolver::default().program(), "oc");
        assert_eq!(OcResolver::with_program("/usr/bin/oc").program(), "/usr/bin/oc");
    }

    #[tokio::test]
    async fn test_static_resolver_deduplicates() {
        let resolver = StaticResolver::new(["A", "B", "", "A"]);
        let repositories = resolver.resolve("ignored").await.expect("resolve");
        assert_eq!(repositories, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let resolver = OcResolver::with_program("/nonexistent/release-changes/oc");
        let result = resolver.resolve("payload").await;
        assert!(matches!(result, Err(PayloadError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_program_is_command_error() {
        let resolver = OcResolver::with_program("false");
        let result = resolver.resolve("payload").await;
        assert!(matches!(result, Err(PayloadError::CommandFailed { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_json_output_is_parse_error() {
        // `echo` succeeds and prints its arguments, which is not JSON
        let resolver = OcResolver::with_program("echo");
        let result = resolver.resolve("payload").await;
        assert!(matches!(result, Err(PayloadError::JsonParse(_))));
    }
}
