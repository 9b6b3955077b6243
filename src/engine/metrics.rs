//! Engine match metrics.
//!
//! Every call to [`crate::Engine::match_input`] records exactly one outcome,
//! matched or failed, together with the time it spent scanning and rendering.
//! The recorder keeps:
//!
//! - `total_matches` / `total_failures`
//! - a running mean of elapsed time across *all* recorded calls
//!
//! The mean is updated incrementally:
//!
//! ```text
//! n    = total_matches + total_failures   (after this call)
//! avg' = (avg * (n - 1) + elapsed_ms) / n
//! ```
//!
//! which equals the arithmetic mean of every elapsed time seen so far.
//!
//! Snapshots are taken as [`EngineMetrics`], a plain value that never aliases
//! the recorder.

use serde::Serialize;

/// Outcome of one match call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Matched,
    Failed,
}

/// Snapshot of engine counters.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct EngineMetrics {
    /// Calls that selected a pair.
    pub total_matches: u64,
    /// Calls where no left pattern matched.
    pub total_failures: u64,
    /// Arithmetic mean of elapsed time over all calls, in milliseconds.
    pub average_match_time_ms: f64,
    /// Number of stored pairs.
    pub pair_count: usize,
}

/// Running counters owned by the engine.
#[derive(Debug, Default, Clone)]
pub(crate) struct MetricsRecorder {
    total_matches: u64,
    total_failures: u64,
    average_match_time_ms: f64,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one call and fold `elapsed_ms` into the running mean.
    pub fn record(&mut self, outcome: Outcome, elapsed_ms: f64) {
        match outcome {
            Outcome::Matched => self.total_matches += 1,
            Outcome::Failed => self.total_failures += 1,
        }

        let n = (self.total_matches + self.total_failures) as f64;
        self.average_match_time_ms = (self.average_match_time_ms * (n - 1.0) + elapsed_ms) / n;
    }

    pub fn snapshot(&self, pair_count: usize) -> EngineMetrics {
        EngineMetrics {
            total_matches: self.total_matches,
            total_failures: self.total_failures,
            average_match_time_ms: self.average_match_time_ms,
            pair_count,
        }
    }
}
