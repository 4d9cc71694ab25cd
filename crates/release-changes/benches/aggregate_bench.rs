// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use release_changes::{ProcessOptions, aggregate, report};
use release_changes_github::{CommitSource, GitHubError, RawCommit, RepositoryRef};

/// Commit source answering instantly with a fixed number of commits
struct InstantSource {
    per_repository: usize,
}

#[async_trait]
impl CommitSource for InstantSource {
    async fn list_commits(
        &self,
        repository: &RepositoryRef,
        _branch: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<RawCommit>, GitHubError> {
        Ok((0..self.per_repository)
            .map(|i| RawCommit {
                sha: format!("{i:040x}"),
                html_url: format!("{}/commit/{i:07x}", repository.url()),
                message: format!(
                    "Change {i} in {repository}\n\nA body line that is long enough to be cut at eighty characters by the sanitizer\n\nSigned-off-by: Dev <dev@example.com>"
                ),
                committed_at: since + chrono::Duration::seconds((i * 37 % 86_400) as i64),
            })
            .collect())
    }
}

fn aggregate_benchmarks(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let options = ProcessOptions::new(
        NonZeroUsize::new(10).expect("non-zero"),
        Duration::from_secs(86_400),
        "master",
    );

    let mut group = c.benchmark_group("aggregate");

    for repositories in [10, 100] {
        let references: Vec<String> = (0..repositories)
            .map(|i| format!("https://github.com/openshift/component-{i}"))
            .collect();
        let source: Arc<dyn CommitSource> = Arc::new(InstantSource { per_repository: 30 });

        group.bench_with_input(
            BenchmarkId::from_parameter(repositories),
            &references,
            |b, references| {
                b.iter(|| {
                    runtime
                        .block_on(aggregate(Arc::clone(&source), &options, references))
                        .expect("aggregate failed")
                })
            },
        );
    }

    group.finish();
}

fn report_benchmarks(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let options = ProcessOptions::new(
        NonZeroUsize::new(10).expect("non-zero"),
        Duration::from_secs(86_400),
        "master",
    );
    let references: Vec<String> = (0..20)
        .map(|i| format!("https://github.com/openshift/component-{i}"))
        .collect();
    let changes = runtime
        .block_on(aggregate(
            Arc::new(InstantSource { per_repository: 10 }),
            &options,
            &references,
        ))
        .expect("aggregate failed");

    c.bench_function("render_table_200", |b| b.iter(|| report::render_table(&changes)));
}

criterion_group!(benches, aggregate_benchmarks, report_benchmarks);
criterion_main!(benches);
