//! Documentation file classification by extension and file name.
//!
//! A file is documentation when its extension is one of the configured
//! documentation extensions and its lowercased name either contains a keyword
//! or starts with `readme`.
//!
//! Keyword matching is a plain substring test: `doc` matches `docker.md` and
//! `ui` matches `build.md`.

use crate::models::ScanConfig;
use camino::Utf8Path;
use indexmap::IndexSet;

const README_PREFIX: &str = "readme";

/// Classifies file paths as documentation.
#[derive(Debug, Clone)]
pub struct Classifier {
    keywords: IndexSet<String>,
    doc_extensions: IndexSet<String>,
}

impl Classifier {
    /// Build a classifier from already-normalized keyword and extension sets.
    pub fn new(keywords: IndexSet<String>, doc_extensions: IndexSet<String>) -> Self {
        Self {
            keywords,
            doc_extensions,
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.keywords().clone(), config.doc_extensions().clone())
    }

    /// Returns true if `path` names a documentation file.
    ///
    /// Only the file name is inspected; the directory part is ignored.
    pub fn is_documentation_file(&self, path: &Utf8Path) -> bool {
        let Some(extension) = path.extension() else {
            return false;
        };
        if !self
            .doc_extensions
            .contains(&format!(".{}", extension.to_lowercase()))
        {
            return false;
        }

        let Some(filename) = path.file_name() else {
            return false;
        };
        let filename_lower = filename.to_lowercase();

        if self
            .keywords
            .iter()
            .any(|keyword| filename_lower.contains(keyword.as_str()))
        {
            return true;
        }

        filename_lower.starts_with(README_PREFIX)
    }
}
