// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! release-changes: audit recent commits across a release payload
//!
//! This binary crate resolves the source repositories of a release payload,
//! lists their recent commits on GitHub and prints one report, oldest first.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use release_changes::aggregate::aggregate;
use release_changes::config::Config;
use release_changes::report;
use release_changes_github::GitHubClient;
use release_changes_payload::{OcResolver, PayloadResolver, StaticResolver};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Initialize tracing subscriber, writing to stderr so the report stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    if let Err(e) = run(&config).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<()> {
    let options = config.process_options()?;
    let token = config.github_token()?;

    let resolver: Box<dyn PayloadResolver> = if config.repositories.is_empty() {
        Box::new(OcResolver::with_program(&config.oc))
    } else {
        Box::new(StaticResolver::new(config.repositories.iter().cloned()))
    };
    let repositories = resolver
        .resolve(&config.payload)
        .await
        .with_context(|| format!("Unable to determine repositories of {}", config.payload))?;

    info!("{}", config.run_summary(repositories.len()));

    let client = GitHubClient::new(token).with_base_url(&config.api_url);
    let changes = aggregate(Arc::new(client), &options, &repositories)
        .await
        .context("Unable to collect changes")?;

    info!("Found {} changes", changes.len());
    println!("{}", report::render(&changes, config.format)?);
    Ok(())
}
