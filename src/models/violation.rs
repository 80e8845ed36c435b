use crate::metrics::ScanMetrics;
use camino::Utf8PathBuf;
use chrono::{DateTime, Local};

/// A documentation file found outside every allowed location.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolationRecord {
    pub absolute_path: Utf8PathBuf,
    /// Path relative to the project root
    pub relative_path: Utf8PathBuf,
    pub filename: String,
    /// Size at scan time; 0 if the file could not be inspected
    pub size_bytes: u64,
    /// Modification time; `None` if the file could not be inspected
    pub modified: Option<DateTime<Local>>,
}

impl ViolationRecord {
    /// Size in kilobytes. Reports print it with one decimal.
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }

    /// Modification date as `YYYY-MM-DD`, if known.
    pub fn modified_date(&self) -> Option<String> {
        self.modified.map(|m| m.format("%Y-%m-%d").to_string())
    }
}

/// Outcome of a single scan: violations in walk order plus run metrics.
#[derive(Debug)]
pub struct ScanResult {
    pub violations: Vec<ViolationRecord>,
    pub metrics: ScanMetrics,
}

impl ScanResult {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Process exit status for CI: 0 when clean, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() { 0 } else { 1 }
    }
}
