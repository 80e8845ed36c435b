use crate::metrics::ScanMetrics;
use crate::models::{ScanConfig, ScanResult, ViolationRecord};
use crate::services::{Classifier, LocationFilter};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Local};
use std::fs;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Errors that abort a scan before it starts
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Project root not found or not a directory: {0}")]
    ProjectRootNotFound(Utf8PathBuf),

    #[error("Documentation folder must be a subdirectory of the project root: {0:?}")]
    InvalidDocsFolder(String),
}

/// Walks a project tree and collects misplaced documentation files.
///
/// The walk is sorted by file name so repeated scans of the same tree return
/// the same records in the same order. Exempt directories are pruned before
/// descent; they would be allowed by [`LocationFilter`] anyway.
pub struct Scanner {
    project_root: Utf8PathBuf,
    classifier: Classifier,
    location_filter: LocationFilter,
}

impl Scanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            project_root: config.project_root().to_path_buf(),
            classifier: Classifier::from_config(config),
            location_filter: LocationFilter::from_config(config),
        }
    }

    /// Scan the project tree once.
    ///
    /// Unreadable directories and non-UTF-8 names are logged and skipped.
    /// A file that disappears between listing and inspection is still
    /// reported, with size 0 and no modification time.
    pub fn scan(&self) -> ScanResult {
        let mut metrics = ScanMetrics::new();
        let mut violations = Vec::new();
        let mut pruned = 0usize;

        tracing::info!("Scanning project: {}", self.project_root);

        let walker = WalkDir::new(&self.project_root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let prune = self.should_prune(entry);
                if prune {
                    tracing::debug!("Pruning exempt directory: {}", entry.path().display());
                    pruned += 1;
                }
                !prune
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    metrics.entries_skipped += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = match Utf8PathBuf::from_path_buf(entry.into_path()) {
                Ok(path) => path,
                Err(path) => {
                    tracing::warn!("Skipping non UTF-8 path: {}", path.display());
                    metrics.entries_skipped += 1;
                    continue;
                }
            };

            metrics.files_visited += 1;

            if !self.classifier.is_documentation_file(&path) {
                continue;
            }
            metrics.docs_classified += 1;

            if self.location_filter.is_in_allowed_location(&path) {
                tracing::trace!("Documentation in allowed location: {}", path);
                continue;
            }

            tracing::debug!("Misplaced documentation file: {}", path);
            violations.push(self.build_record(path));
        }

        metrics.dirs_pruned = pruned;
        metrics.violations = violations.len();
        metrics.finish();
        metrics.log_summary();

        ScanResult {
            violations,
            metrics,
        }
    }

    fn should_prune(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.location_filter.is_exempt_directory(name))
    }

    fn build_record(&self, path: Utf8PathBuf) -> ViolationRecord {
        let relative_path = path
            .strip_prefix(&self.project_root)
            .map(Utf8Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());
        let filename = path.file_name().unwrap_or_default().to_string();

        let (size_bytes, modified) = match fs::metadata(&path) {
            Ok(metadata) => (
                metadata.len(),
                metadata.modified().ok().map(DateTime::<Local>::from),
            ),
            Err(e) => {
                tracing::debug!("Could not inspect {}: {}", path, e);
                (0, None)
            }
        };

        ViolationRecord {
            absolute_path: path,
            relative_path,
            filename,
            size_bytes,
            modified,
        }
    }
}

/// Scan the tree described by `config`.
pub fn scan(config: &ScanConfig) -> ScanResult {
    Scanner::new(config).scan()
}
