// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for release-changes flags
//!
//! These tests verify flag parsing and how flags turn into run options.

use std::time::Duration;

use clap::Parser;
use release_changes::config::{Config, ConfigError, DEFAULT_PAYLOAD, OutputFormat};
use tracing::Level;

fn parse(args: &[&str]) -> Result<Config, clap::Error> {
    let mut argv = vec!["release-changes"];
    argv.extend_from_slice(args);
    Config::try_parse_from(argv)
}

// ============================================================================
// Commit window flags
// ============================================================================

#[test]
fn test_since_accepts_days_hours_and_weeks() {
    for (input, seconds) in [("1d", 86_400), ("48h", 172_800), ("2w", 1_209_600), ("90m", 5_400)] {
        let config = parse(&["--since", input]).expect("parse should succeed");
        let options = config.process_options().expect("options");
        assert_eq!(options.since, Duration::from_secs(seconds), "input {input}");
    }
}

#[test]
fn test_since_combined_units() {
    let config = parse(&["--since", "1d 12h"]).expect("parse should succeed");
    assert_eq!(
        config.process_options().expect("options").since,
        Duration::from_secs(36 * 3600)
    );
}

#[test]
fn test_since_invalid_reported_with_value() {
    let config = parse(&["--since", "1 fortnight"]).expect("parse should succeed");
    let err = config.process_options().expect_err("invalid duration");
    assert!(matches!(err, ConfigError::InvalidDuration { .. }));
    assert!(err.to_string().contains("1 fortnight"));
}

#[test]
fn test_branch_short_and_long() {
    let config = parse(&["-b", "release-4.8"]).expect("parse should succeed");
    assert_eq!(config.branch, "release-4.8");
    let config = parse(&["--branch", "main"]).expect("parse should succeed");
    assert_eq!(config.process_options().expect("options").branch, "main");
}

// ============================================================================
// Repository selection flags
// ============================================================================

#[test]
fn test_payload_default_and_override() {
    let config = parse(&[]).expect("parse should succeed");
    assert_eq!(config.payload, DEFAULT_PAYLOAD);

    let config = parse(&["-p", "quay.io/openshift-release-dev/ocp-release:4.8.0-x86_64"])
        .expect("parse should succeed");
    assert_eq!(config.payload, "quay.io/openshift-release-dev/ocp-release:4.8.0-x86_64");
}

#[test]
fn test_repository_flag_repeatable() {
    let config = parse(&[
        "--repository",
        "https://github.com/openshift/api",
        "--repository",
        "https://github.com/openshift/installer",
    ])
    .expect("parse should succeed");
    assert_eq!(
        config.repositories,
        vec![
            "https://github.com/openshift/api".to_string(),
            "https://github.com/openshift/installer".to_string(),
        ]
    );
}

#[test]
fn test_oc_program_override() {
    let config = parse(&["--oc", "/opt/bin/oc"]).expect("parse should succeed");
    assert_eq!(config.oc, "/opt/bin/oc");
}

// ============================================================================
// GitHub and output flags
// ============================================================================

#[test]
fn test_token_flag() {
    let config = parse(&["--token", "ghp_flag"]).expect("parse should succeed");
    assert_eq!(config.github_token().expect("token"), "ghp_flag");
}

#[test]
fn test_api_url_override() {
    let config = parse(&["--api-url", "https://github.example.com/api/v3"])
        .expect("parse should succeed");
    assert_eq!(config.api_url, "https://github.example.com/api/v3");
}

#[test]
fn test_concurrency_flag() {
    let config = parse(&["-c", "3"]).expect("parse should succeed");
    assert_eq!(config.process_options().expect("options").concurrency.get(), 3);
}

#[test]
fn test_concurrency_rejects_negative() {
    assert!(parse(&["--concurrency", "-1"]).is_err());
}

#[test]
fn test_format_flag() {
    let config = parse(&["--format", "json"]).expect("parse should succeed");
    assert_eq!(config.format, OutputFormat::Json);
    assert!(parse(&["--format", "yaml"]).is_err());
}

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_verbose_and_quiet_levels() {
    let config = parse(&["--verbose"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
    let config = parse(&["--quiet"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_verbose_takes_precedence_over_quiet() {
    let config = parse(&["-v", "-q"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_verbose_flag_value_syntax_not_supported() {
    // Boolean flags are toggled by presence only
    assert!(parse(&["--verbose=true"]).is_err());
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(parse(&["--until", "1d"]).is_err());
}
