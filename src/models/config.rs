use crate::services::ScanError;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Default name of the documentation folder, relative to the project root.
pub const DEFAULT_DOCS_FOLDER: &str = "docs_VistaraUI";

/// Default name of the report written by every scan.
pub const DEFAULT_REPORT_FILENAME: &str = "latest_documentation_scan.md";

const DEFAULT_KEYWORDS: &[&str] = &[
    "guide",
    "guides",
    "guidance",
    "tutorial",
    "tutorials",
    "manual",
    "manuals",
    "instruction",
    "instructions",
    "documentation",
    "docs",
    "doc",
    "readme",
    "howto",
    "setup",
    "install",
    "config",
    "configuration",
    "help",
    "faq",
    "troubleshoot",
    "troubleshooting",
    "component",
    "components",
    "ui",
    "design",
    "system",
    "migration",
    "deploy",
    "development",
    "dev",
    // Hebrew equivalents
    "מדריך",
    "מדריכים",
    "הוראות",
    "הנחיות",
    "תיעוד",
    "הסבר",
    "התקנה",
    "הגדרה",
    "רכיבים",
    "עיצוב",
    "מערכת",
    "פיתוח",
];

const DEFAULT_DOC_EXTENSIONS: &[&str] = &[".md", ".txt", ".rst", ".adoc"];

const DEFAULT_EXEMPT_DIRECTORIES: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    ".vscode",
    ".idea",
    "venv",
    "env",
    "build",
    "dist",
    "coverage",
];

/// User-facing monitor settings, loaded from `.docwarden.yaml` and the environment.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorSettings {
    /// Documentation folder, relative to the project root
    pub docs_folder: String,

    /// Name shown in the report header; falls back to the root directory name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// Substrings that mark a file name as documentation
    pub keywords: IndexSet<String>,

    /// Extensions eligible for classification, with leading dot
    pub doc_extensions: IndexSet<String>,

    /// Directory names that exempt everything beneath them
    pub exempt_directories: IndexSet<String>,

    /// File name used for the report inside the docs folder
    pub report_filename: String,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            docs_folder: DEFAULT_DOCS_FOLDER.to_string(),
            project_name: None,
            keywords: to_set(DEFAULT_KEYWORDS),
            doc_extensions: to_set(DEFAULT_DOC_EXTENSIONS),
            exempt_directories: to_set(DEFAULT_EXEMPT_DIRECTORIES),
            report_filename: DEFAULT_REPORT_FILENAME.to_string(),
        }
    }
}

fn to_set(items: &[&str]) -> IndexSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Normalize an extension to lowercase with a leading dot (`MD` -> `.md`).
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

// `./docs/` and `docs` resolve to the same folder; anything else outside the root is refused
fn relative_docs_folder(docs_folder: &str) -> Result<Utf8PathBuf, ScanError> {
    let invalid = || ScanError::InvalidDocsFolder(docs_folder.to_string());
    let mut relative = Utf8PathBuf::new();
    for component in Utf8Path::new(docs_folder.trim()).components() {
        match component {
            Utf8Component::Normal(name) => relative.push(name),
            Utf8Component::CurDir => {}
            _ => return Err(invalid()),
        }
    }
    if relative.as_str().is_empty() {
        return Err(invalid());
    }
    Ok(relative)
}

/// Resolved, immutable configuration for a single scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    project_root: Utf8PathBuf,
    docs_folder: Utf8PathBuf,
    project_name: String,
    keywords: IndexSet<String>,
    doc_extensions: IndexSet<String>,
    exempt_directories: IndexSet<String>,
}

impl ScanConfig {
    /// Build a scan configuration rooted at `project_root`.
    ///
    /// The root is canonicalized; keywords are lowercased and extensions
    /// normalized so the classifier can compare them directly.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::ProjectRootNotFound`] if the root does not exist
    /// or is not a directory, and [`ScanError::InvalidDocsFolder`] if the docs
    /// folder is empty, absolute, or climbs out of the root with `..`.
    pub fn new<P: AsRef<Utf8Path>>(
        project_root: P,
        settings: &MonitorSettings,
    ) -> Result<Self, ScanError> {
        let requested = project_root.as_ref();
        let project_root = requested
            .canonicalize_utf8()
            .map_err(|_| ScanError::ProjectRootNotFound(requested.to_path_buf()))?;
        if !project_root.is_dir() {
            return Err(ScanError::ProjectRootNotFound(requested.to_path_buf()));
        }

        let docs_relative = relative_docs_folder(&settings.docs_folder)?;

        let project_name = settings
            .project_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| project_root.file_name().map(str::to_string))
            .unwrap_or_else(|| project_root.to_string());

        Ok(Self {
            docs_folder: project_root.join(docs_relative),
            project_name,
            keywords: settings.keywords.iter().map(|k| k.to_lowercase()).collect(),
            doc_extensions: settings
                .doc_extensions
                .iter()
                .map(|e| normalize_extension(e))
                .collect(),
            exempt_directories: settings.exempt_directories.clone(),
            project_root,
        })
    }

    pub fn project_root(&self) -> &Utf8Path {
        &self.project_root
    }

    /// Absolute path of the documentation folder.
    pub fn docs_folder(&self) -> &Utf8Path {
        &self.docs_folder
    }

    /// Documentation folder relative to the project root.
    pub fn docs_folder_relative(&self) -> &Utf8Path {
        self.docs_folder
            .strip_prefix(&self.project_root)
            .unwrap_or(self.docs_folder.as_path())
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn keywords(&self) -> &IndexSet<String> {
        &self.keywords
    }

    pub fn doc_extensions(&self) -> &IndexSet<String> {
        &self.doc_extensions
    }

    pub fn exempt_directories(&self) -> &IndexSet<String> {
        &self.exempt_directories
    }
}
