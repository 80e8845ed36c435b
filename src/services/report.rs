//! Markdown report rendering and persistence.
//!
//! The report has a fixed layout: a header with the scan timestamp and
//! status, a summary, then either a table of misplaced files followed by
//! remediation steps, or an "all clear" block. Rendering is deterministic for
//! a given set of violations and timestamp.

use crate::VERSION;
use crate::models::{ScanConfig, ViolationRecord};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::fs;
use thiserror::Error;

/// Errors that can occur while saving a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Documentation folder does not exist: {0}")]
    DocsFolderMissing(Utf8PathBuf),

    #[error("Report file name must be a plain file name: {0}")]
    InvalidFilename(String),

    #[error("Failed to write report {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Renders scan results and writes them into the docs folder.
#[derive(Debug, Clone)]
pub struct Reporter {
    project_name: String,
    docs_folder: Utf8PathBuf,
    docs_folder_display: String,
}

impl Reporter {
    /// `docs_folder` is where reports are written; `docs_folder_display` is
    /// how the folder is named inside the report text.
    pub fn new(
        project_name: impl Into<String>,
        docs_folder: Utf8PathBuf,
        docs_folder_display: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            docs_folder,
            docs_folder_display: docs_folder_display.into(),
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(
            config.project_name(),
            config.docs_folder().to_path_buf(),
            config.docs_folder_relative().as_str(),
        )
    }

    pub fn render_report(&self, violations: &[ViolationRecord], timestamp: DateTime<Local>) -> String {
        let docs = &self.docs_folder_display;
        let status = if violations.is_empty() {
            "🟢 Clean"
        } else {
            "🔴 Violations found"
        };

        let mut report = String::new();
        // Writing to a String never fails
        let _ = write!(
            report,
            "\n# 📚 Documentation Monitor Report: {project}\n\
             **Date:** {date}\n\
             **Status:** {status}\n\
             \n\
             ## 📊 Summary\n\
             - **Misplaced documentation files:** {count}\n\
             - **Documentation folder:** `{docs}/`\n\
             \n",
            project = self.project_name,
            date = timestamp.format("%Y-%m-%d %H:%M:%S"),
            count = violations.len(),
        );

        if violations.is_empty() {
            let _ = write!(
                report,
                "\n## ✅ All clear\n\
                 All documentation files are in the right place.\n\
                 No documentation files were found outside the allowed folders.\n\
                 \n\
                 ## 🎯 Current state\n\
                 - All documentation lives in `{docs}/`\n\
                 - Folder structure is organized\n\
                 - No duplicates\n\
                 - No stray README files\n"
            );
        } else {
            let _ = write!(
                report,
                "\n## 🔴 Documentation files found outside {docs}\n\
                 \n\
                 | File | Location | Size | Last Modified |\n\
                 |------|----------|------|---------------|\n"
            );
            for violation in violations {
                let _ = writeln!(
                    report,
                    "| `{}` | `{}` | {} | {} |",
                    escape_cell(&violation.filename),
                    escape_cell(violation.relative_path.as_str()),
                    format_size(violation),
                    violation
                        .modified_date()
                        .unwrap_or_else(|| "N/A".to_string()),
                );
            }
            let _ = write!(
                report,
                "\n## 🔧 Recommended actions\n\
                 1. **Review each file** - is it really documentation that belongs in {docs}?\n\
                 2. **Move it to the right folder** - if so, move it into the matching category\n\
                 3. **Update the format** - make sure the file follows the standard template\n\
                 4. **Remove duplicates** - if a newer version already exists in {docs}\n\
                 5. **Follow the \"NO README\" rule** - prefer descriptive file names\n\
                 \n"
            );
        }

        let _ = write!(
            report,
            "\n---\n\
             **Generated by:** docwarden v{VERSION}  \n\
             **Project:** {project}  \n",
            project = self.project_name,
        );

        report
    }

    /// Write `report` into the docs folder and return the written path.
    ///
    /// Without a file name, a timestamped name is generated so earlier
    /// reports are kept. An existing file with the same name is overwritten.
    /// Names with separators or `..` are rejected so the report cannot land
    /// outside the docs folder.
    pub fn save_report(
        &self,
        report: &str,
        filename: Option<&str>,
    ) -> Result<Utf8PathBuf, ReportError> {
        if !self.docs_folder.is_dir() {
            return Err(ReportError::DocsFolderMissing(self.docs_folder.clone()));
        }

        let filename = match filename {
            Some(name) if is_plain_filename(name) => name.to_string(),
            Some(name) => return Err(ReportError::InvalidFilename(name.to_string())),
            None => timestamped_filename(Local::now()),
        };
        let report_path = self.docs_folder.join(filename);

        fs::write(&report_path, report).map_err(|source| ReportError::Write {
            path: report_path.clone(),
            source,
        })?;

        tracing::info!("Saved report to {}", report_path);
        Ok(report_path)
    }
}

/// Report file name for a run started at `timestamp`.
pub fn timestamped_filename(timestamp: DateTime<Local>) -> String {
    format!("documentation_scan_{}.md", timestamp.format("%Y%m%d_%H%M%S"))
}

fn is_plain_filename(name: &str) -> bool {
    let mut components = Utf8Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Utf8Component::Normal(_)), None)
    )
}

// One decimal, ties to even (256 bytes renders as 0.2KB)
fn format_size(violation: &ViolationRecord) -> String {
    if violation.size_bytes == 0 {
        "0KB".to_string()
    } else {
        format!("{:.1}KB", violation.size_kb())
    }
}

// Pipes would split the markdown table cell
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
