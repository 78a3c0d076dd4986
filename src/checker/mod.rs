// src/checker/mod.rs
// =============================================================================
// This module contains all site checking logic.
//
// Submodules:
// - probe: Makes one HTTP request to decide if a single URL is online
// - batch: Runs probes for many URLs, sequentially or concurrently
//
// This file (mod.rs) is the module root - it re-exports the public API so
// the rest of the application can write `checker::Checker` instead of
// `checker::probe::Checker`.
// =============================================================================

mod batch;
mod probe;

pub use batch::{CheckRequest, CheckResult, ExecutionMode};
pub use probe::{Checker, ProbeOutcome};
