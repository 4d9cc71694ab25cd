// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository reference parsing

use std::fmt;

use serde::{Deserialize, Serialize};

/// Host prefix a repository reference must carry to be resolvable
pub const GITHUB_PREFIX: &str = "https://github.com/";

/// A GitHub repository identified by organization and name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    /// Owning organization or user
    pub organization: String,
    /// Repository name
    pub name: String,
}

impl RepositoryRef {
    /// Create a repository reference from its parts
    #[must_use]
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            name: name.into(),
        }
    }

    /// The web URL of the repository
    #[must_use]
    pub fn url(&self) -> String {
        format!("{GITHUB_PREFIX}{}/{}", self.organization, self.name)
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.name)
    }
}

/// Split a repository reference into organization and name
///
/// Only references of the form `https://github.com/<org>/<name>` are
/// accepted: the prefix must match exactly and the remainder must split into
/// exactly two non-empty path segments. Anything else yields `None`, which
/// callers treat as a failure of that repository alone.
///
/// # Example
///
/// ```
/// use release_changes_github::parse_repository;
///
/// let repo = parse_repository("https://github.com/openshift/installer").unwrap();
/// assert_eq!(repo.organization, "openshift");
/// assert_eq!(repo.name, "installer");
///
/// assert!(parse_repository("https://gitlab.com/openshift/installer").is_none());
/// assert!(parse_repository("https://github.com/openshift/installer/tree/master").is_none());
/// ```
#[must_use]
pub fn parse_repository(reference: &str) -> Option<RepositoryRef> {
    let path = reference.strip_prefix(GITHUB_PREFIX)?;
    let mut segments = path.split('/');
    let organization = segments.next().filter(|s| !s.is_empty())?;
    let name = segments.next().filter(|s| !s.is_empty())?;
    if segments.next().is_some() {
        return None;
    }
    Some(RepositoryRef::new(organization, name))
}
