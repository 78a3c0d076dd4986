// src/checker/batch.rs
// =============================================================================
// This module runs probes for a whole batch of URLs.
//
// Two execution modes:
// - Sequential: one probe at a time, strictly in input order
// - Concurrent: every probe starts at once, results are reported as they
//   complete, and the batch ends when all of them are done
//
// Every probe runs inside its own tokio task. If that task panics, the
// panic stops at the task boundary and becomes an "unreachable" result for
// that one URL; the rest of the batch carries on.
// =============================================================================

use super::probe::{Checker, ProbeOutcome};
use futures::stream::{FuturesUnordered, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// How the batch schedules its probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    Concurrent,
}

impl ExecutionMode {
    pub fn from_asynchronous(asynchronous: bool) -> Self {
        if asynchronous {
            ExecutionMode::Concurrent
        } else {
            ExecutionMode::Sequential
        }
    }
}

/// Returned by [`CheckRequest::new`] when there is nothing to check.
#[derive(Debug, thiserror::Error)]
#[error("no URLs to check")]
pub struct EmptyBatch;

/// The URLs of one invocation plus the chosen mode. Never empty.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    urls: Vec<String>,
    mode: ExecutionMode,
}

impl CheckRequest {
    pub fn new(urls: Vec<String>, mode: ExecutionMode) -> Result<Self, EmptyBatch> {
        if urls.is_empty() {
            return Err(EmptyBatch);
        }
        Ok(Self { urls, mode })
    }
}

// The result of checking one URL
//
// #[serde(flatten)] merges the outcome's "status"/"detail" fields into this
// object, so JSON output looks like {"url": ..., "status": ..., "detail": ...}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub url: String,
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
}

impl CheckResult {
    pub fn is_online(&self) -> bool {
        self.outcome.reachable()
    }
}

impl Checker {
    // Checks every URL in the request
    //
    // `on_result` is called exactly once per URL, as soon as that URL's
    // result is known: in input order for sequential mode, in completion
    // order for concurrent mode.
    //
    // Returns all results in input order regardless of mode.
    pub async fn run_batch<F>(&self, request: CheckRequest, mut on_result: F) -> Vec<CheckResult>
    where
        F: FnMut(&CheckResult),
    {
        let CheckRequest { urls, mode } = request;
        info!(count = urls.len(), ?mode, "starting batch");

        let results = match mode {
            ExecutionMode::Sequential => {
                let mut results = Vec::with_capacity(urls.len());
                for url in urls {
                    let result = self.guarded_probe(url).await;
                    on_result(&result);
                    results.push(result);
                }
                results
            }
            ExecutionMode::Concurrent => {
                // Launch everything up front; FuturesUnordered yields each
                // probe as it finishes and is exhausted once all have finished
                let mut pending: FuturesUnordered<_> = urls
                    .into_iter()
                    .enumerate()
                    .map(|(index, url)| {
                        let checker = self.clone();
                        async move { (index, checker.guarded_probe(url).await) }
                    })
                    .collect();

                // Each slot is written by exactly one probe
                let mut slots: Vec<Option<CheckResult>> = vec![None; pending.len()];
                while let Some((index, result)) = pending.next().await {
                    on_result(&result);
                    slots[index] = Some(result);
                }
                slots.into_iter().flatten().collect()
            }
        };

        let online = results.iter().filter(|r| r.is_online()).count();
        info!(online, offline = results.len() - online, "batch finished");
        results
    }

    // Runs one probe in its own task so a panic can't take the batch down
    async fn guarded_probe(&self, url: String) -> CheckResult {
        let checker = self.clone();
        let target = url.clone();
        let task = tokio::spawn(async move { checker.probe(&target).await });

        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(%url, error = %e, "probe task failed");
                ProbeOutcome::unreachable(format!("probe task failed: {}", e))
            }
        };

        CheckResult { url, outcome }
    }
}
