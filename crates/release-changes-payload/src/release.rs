// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Release metadata types
//!
//! This module models the subset of `oc adm release info -o json` output that
//! carries build provenance, and extracts the source repositories from it.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// Annotation holding the source repository URL of an image in the payload
pub const SOURCE_LOCATION_ANNOTATION: &str = "io.openshift.build.source-location";

/// Top-level release metadata document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Image references making up the release
    #[serde(default)]
    pub references: References,
}

/// The image stream embedded in a release
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct References {
    /// Image stream spec
    #[serde(default)]
    pub spec: ReferencesSpec,
}

/// Spec of the embedded image stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencesSpec {
    /// One tag per component image
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// A component image tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name (component name)
    #[serde(default)]
    pub name: String,
    /// Build annotations attached to the image
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl Tag {
    /// Get the source repository of this image, if it has a non-empty one
    #[must_use]
    pub fn source_location(&self) -> Option<&str> {
        self.annotations
            .get(SOURCE_LOCATION_ANNOTATION)
            .map(String::as_str)
            .filter(|location| !location.is_empty())
    }
}

impl Release {
    /// Parse release metadata from JSON
    ///
    /// # Errors
    ///
    /// Returns `PayloadError::JsonParse` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Source repositories referenced by the release
    ///
    /// Repositories are returned in order of first appearance; later
    /// duplicates (by exact string equality) and tags without a source
    /// location are skipped.
    #[must_use]
    pub fn repositories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.references
            .spec
            .tags
            .iter()
            .filter_map(Tag::source_location)
            .filter(|location| seen.insert(*location))
            .map(str::to_string)
            .collect()
    }
}

/// Parse release metadata and return its source repositories
///
/// # Errors
///
/// Returns `PayloadError::JsonParse` if the document is malformed.
pub fn repositories_from_json(json: &str) -> Result<Vec<String>, PayloadError> {
    Ok(Release::from_json(json)?.repositories())
}
