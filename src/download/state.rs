//! Download run state tracking.

use crate::config::DownloadMode;
use crate::download::retry::RetryOutcome;

/// Counters for a single run.
#[derive(Debug, Default, Clone)]
pub struct RunState {
    pub mode: DownloadMode,

    // Statistics
    pub attempted: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub retried: u64,
    pub bytes_written: u64,
}

impl RunState {
    /// Create an empty state for a run in `mode`.
    pub fn new(mode: DownloadMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Account for one item after all of its attempts.
    pub fn record(&mut self, outcome: &RetryOutcome<u64>) {
        self.attempted += 1;
        if outcome.retried() {
            self.retried += 1;
        }
        match outcome.value {
            Some(bytes) => {
                self.succeeded += 1;
                self.bytes_written += bytes;
            }
            None => self.failed += 1,
        }
    }

    /// Whether every attempted item ended up on disk.
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}
