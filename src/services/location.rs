use crate::models::ScanConfig;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use indexmap::IndexSet;

/// Decides whether a documentation file sits somewhere it is allowed to.
///
/// A path is allowed when it is inside the docs folder, or when any directory
/// component of the full path carries an exempt name, including directories
/// above the project root. Both checks are lexical.
#[derive(Debug, Clone)]
pub struct LocationFilter {
    project_root: Utf8PathBuf,
    docs_folder: Utf8PathBuf,
    exempt_directories: IndexSet<String>,
}

impl LocationFilter {
    /// `docs_folder` should be absolute and below `project_root`.
    pub fn new(
        project_root: Utf8PathBuf,
        docs_folder: Utf8PathBuf,
        exempt_directories: IndexSet<String>,
    ) -> Self {
        Self {
            project_root,
            docs_folder,
            exempt_directories,
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(
            config.project_root().to_path_buf(),
            config.docs_folder().to_path_buf(),
            config.exempt_directories().clone(),
        )
    }

    /// Directory names here are pruned from the walk and exempt from reporting.
    pub fn is_exempt_directory(&self, name: &str) -> bool {
        self.exempt_directories.contains(name)
    }

    pub fn is_in_allowed_location(&self, path: &Utf8Path) -> bool {
        if self.is_in_docs_folder(path) {
            return true;
        }

        path.parent()
            .map(|dir| {
                dir.components().any(|component| match component {
                    Utf8Component::Normal(name) => self.is_exempt_directory(name),
                    _ => false,
                })
            })
            .unwrap_or(false)
    }

    fn is_in_docs_folder(&self, path: &Utf8Path) -> bool {
        if path.starts_with(&self.docs_folder) {
            return true;
        }
        match self.docs_folder.strip_prefix(&self.project_root) {
            Ok(relative_docs) if path.is_relative() => path.starts_with(relative_docs),
            _ => false,
        }
    }
}
