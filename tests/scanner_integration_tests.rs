//! Integration tests for the scan engine
//!
//! These tests verify:
//! - End-to-end classification and location filtering on real trees
//! - Pruning of exempt directories
//! - Deterministic walk order across repeated scans
//! - Report rendering and saving from scan results

use camino::{Utf8Path, Utf8PathBuf};
use chrono::Local;
use docwarden::{MonitorSettings, Reporter, ScanConfig, scan};
use std::fs;
use tempfile::TempDir;

fn create_project(files: &[&str]) -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    for file in files {
        write_file(&root, file, "# Title\n");
    }
    (temp_dir, root)
}

fn write_file(root: &Utf8Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn default_config(root: &Utf8Path) -> ScanConfig {
    ScanConfig::new(root, &MonitorSettings::default()).unwrap()
}

fn relative_paths(config: &ScanConfig) -> Vec<String> {
    scan(config)
        .violations
        .iter()
        .map(|v| v.relative_path.to_string())
        .collect()
}

#[test]
fn test_docs_only_in_docs_folder_is_clean() {
    let (_temp_dir, root) = create_project(&["docs_VistaraUI/setup.md"]);
    let result = scan(&default_config(&root));

    assert!(result.is_clean());
    assert_eq!(result.exit_code(), 0);
    assert_eq!(result.metrics.docs_classified, 1);
}

#[test]
fn test_readme_outside_docs_is_flagged() {
    let (_temp_dir, root) = create_project(&["src/README.md", "docs_VistaraUI/guide.md"]);
    let config = default_config(&root);
    let result = scan(&config);

    assert_eq!(result.len(), 1);
    assert_eq!(result.exit_code(), 1);

    let violation = &result.violations[0];
    assert_eq!(violation.filename, "README.md");
    assert_eq!(violation.relative_path, Utf8PathBuf::from("src/README.md"));
    assert_eq!(violation.absolute_path, config.project_root().join("src/README.md"));
    assert_eq!(violation.size_bytes, "# Title\n".len() as u64);
    assert!(violation.modified.is_some());

    let report = Reporter::from_config(&config).render_report(&result.violations, Local::now());
    let rows: Vec<&str> = report
        .lines()
        .filter(|line| line.starts_with("| `"))
        .collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("| `README.md` | `src/README.md` |"));
}

#[test]
fn test_exempt_directory_is_ignored() {
    let (_temp_dir, root) = create_project(&["node_modules/tutorial.md"]);
    let result = scan(&default_config(&root));

    assert!(result.is_clean());
    assert_eq!(result.metrics.dirs_pruned, 1);
}

#[test]
fn test_text_file_without_keyword_is_not_documentation() {
    let (_temp_dir, root) = create_project(&["notes.txt"]);
    let result = scan(&default_config(&root));

    assert!(result.is_clean());
    assert_eq!(result.metrics.files_visited, 1);
    assert_eq!(result.metrics.docs_classified, 0);
}

#[test]
fn test_nested_exempt_directories() {
    let (_temp_dir, root) = create_project(&[
        "packages/web/node_modules/lib/README.md",
        "packages/web/dist/guide.md",
        "services/api/venv/lib/install.txt",
        "packages/web/README.md",
    ]);

    assert_eq!(
        relative_paths(&default_config(&root)),
        vec!["packages/web/README.md"]
    );
}

#[test]
fn test_non_documentation_extensions_are_ignored() {
    let (_temp_dir, root) = create_project(&["README.py", "setup.cfg", "src/guide.rs"]);
    assert!(scan(&default_config(&root)).is_clean());
}

#[test]
fn test_walk_order_is_deterministic() {
    let (_temp_dir, root) = create_project(&[
        "zeta/guide.md",
        "alpha/README.md",
        "middle/tutorial.rst",
        "alpha/beta/setup.txt",
        "INSTALL.md",
    ]);
    let config = default_config(&root);

    let first = relative_paths(&config);
    let second = relative_paths(&config);

    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            "INSTALL.md",
            "alpha/README.md",
            "alpha/beta/setup.txt",
            "middle/tutorial.rst",
            "zeta/guide.md",
        ]
    );
}

#[test]
fn test_custom_docs_folder() {
    let (_temp_dir, root) = create_project(&["documentation/guide.md", "docs_VistaraUI/setup.md"]);

    let mut settings = MonitorSettings::default();
    settings.docs_folder = "documentation".to_string();
    let config = ScanConfig::new(&root, &settings).unwrap();

    assert_eq!(relative_paths(&config), vec!["docs_VistaraUI/setup.md"]);
}

#[test]
fn test_nested_docs_folder() {
    let (_temp_dir, root) = create_project(&["site/docs/guide.md", "site/guide.md"]);

    let mut settings = MonitorSettings::default();
    settings.docs_folder = "site/docs".to_string();
    let config = ScanConfig::new(&root, &settings).unwrap();

    assert_eq!(relative_paths(&config), vec!["site/guide.md"]);
}

#[test]
fn test_scan_and_save_report() {
    let (_temp_dir, root) = create_project(&["guide.md", "docs_VistaraUI/setup.md"]);
    let config = default_config(&root);

    let result = scan(&config);
    let reporter = Reporter::from_config(&config);
    let report = reporter.render_report(&result.violations, Local::now());
    let path = reporter
        .save_report(&report, Some("latest_documentation_scan.md"))
        .unwrap();

    assert_eq!(path, config.docs_folder().join("latest_documentation_scan.md"));
    let saved = fs::read_to_string(&path).unwrap();
    assert_eq!(saved, report);

    // The saved report lives in the docs folder and does not count on rescan
    assert_eq!(scan(&config).len(), 1);
}

#[test]
fn test_save_report_without_docs_folder_fails() {
    let (_temp_dir, root) = create_project(&["guide.md"]);
    let config = default_config(&root);

    let result = scan(&config);
    let reporter = Reporter::from_config(&config);
    let report = reporter.render_report(&result.violations, Local::now());

    assert!(reporter.save_report(&report, None).is_err());
    assert_eq!(result.len(), 1);
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_does_not_abort_scan() {
    use std::os::unix::fs::PermissionsExt;

    let (_temp_dir, root) = create_project(&["locked/guide.md", "open/README.md"]);
    let locked = root.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    let locked_is_unreadable = fs::read_dir(&locked).is_err();

    let result = scan(&default_config(&root));

    // Restore so the temp dir can be cleaned up
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(
        result
            .violations
            .iter()
            .any(|v| v.relative_path == Utf8PathBuf::from("open/README.md"))
    );
    // Privileged users can still read the directory
    if locked_is_unreadable {
        assert!(result.metrics.entries_skipped >= 1);
        assert!(
            !result
                .violations
                .iter()
                .any(|v| v.relative_path == Utf8PathBuf::from("locked/guide.md"))
        );
    }
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_are_not_followed() {
    let (_temp_dir, root) = create_project(&["real/guide.md"]);
    std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();

    assert_eq!(relative_paths(&default_config(&root)), vec!["real/guide.md"]);
}
