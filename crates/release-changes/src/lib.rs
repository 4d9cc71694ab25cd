// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! release-changes library
//!
//! This module exports the aggregation pipeline, configuration and report
//! rendering of release-changes for use in integration tests and as a library.

pub mod aggregate;
pub mod config;
pub mod report;

pub use aggregate::{AggregateError, ProcessOptions, aggregate};
