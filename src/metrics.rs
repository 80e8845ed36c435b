// Scan metrics
//
// Counters collected during a single walk of the project tree

use std::time::{Duration, Instant};

/// Counters for one scan.
///
/// The walk is single-threaded, so plain integers are enough.
#[derive(Debug, Clone)]
pub struct ScanMetrics {
    /// Regular files visited by the walker
    pub files_visited: usize,

    /// Files the classifier recognized as documentation
    pub docs_classified: usize,

    /// Directories skipped because their name is exempt
    pub dirs_pruned: usize,

    /// Entries that could not be read or were not valid UTF-8
    pub entries_skipped: usize,

    /// Documentation files found outside allowed locations
    pub violations: usize,

    start_time: Instant,
    elapsed: Option<Duration>,
}

impl ScanMetrics {
    pub fn new() -> Self {
        Self {
            files_visited: 0,
            docs_classified: 0,
            dirs_pruned: 0,
            entries_skipped: 0,
            violations: 0,
            start_time: Instant::now(),
            elapsed: None,
        }
    }

    /// Freeze the elapsed time at the end of the walk
    pub fn finish(&mut self) {
        self.elapsed = Some(self.start_time.elapsed());
    }

    /// Time spent scanning, or time so far if the scan has not finished.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.start_time.elapsed())
    }

    pub fn log_summary(&self) {
        tracing::info!(
            files_visited = self.files_visited,
            docs_classified = self.docs_classified,
            violations = self.violations,
            "Scan finished in {:.2}s",
            self.elapsed().as_secs_f64()
        );
        tracing::debug!(
            dirs_pruned = self.dirs_pruned,
            entries_skipped = self.entries_skipped,
            "Walk details"
        );
    }
}

impl Default for ScanMetrics {
    fn default() -> Self {
        Self::new()
    }
}
