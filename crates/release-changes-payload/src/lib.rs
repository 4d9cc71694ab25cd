// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! release-changes-payload: release payload inspection for release-changes
//!
//! This library crate turns a release payload pull spec into the ordered,
//! de-duplicated list of source repositories that were built into it.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use release_changes_payload::{OcResolver, PayloadResolver};
//!
//! # async fn example() -> Result<(), release_changes_payload::PayloadError> {
//! let resolver = OcResolver::new();
//! let repositories = resolver
//!     .resolve("quay.io/openshift-release-dev/ocp-release:4.9.0-fc.0-x86_64")
//!     .await?;
//!
//! for repository in repositories {
//!     println!("{repository}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod release;
pub mod resolver;

pub use error::PayloadError;
pub use release::{
    References, ReferencesSpec, Release, SOURCE_LOCATION_ANNOTATION, Tag, repositories_from_json,
};
pub use resolver::{OcResolver, PayloadResolver, StaticResolver};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::PayloadError;
    pub use crate::release::{Release, repositories_from_json};
    pub use crate::resolver::{OcResolver, PayloadResolver, StaticResolver};
}
