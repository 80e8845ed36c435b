use crate::models::MonitorSettings;
use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};
use ::config::{Config, Environment, File, FileFormat};
use std::collections::HashMap;
use std::fs;

/// Settings file looked up in the project root when no path is given.
pub const SETTINGS_FILENAME: &str = ".docwarden.yaml";

/// Prefix of environment variables that override settings (`DOCWARDEN_DOCS_FOLDER`, ...).
pub const ENV_PREFIX: &str = "DOCWARDEN";

const LIST_KEYS: &[&str] = &["keywords", "doc_extensions", "exempt_directories"];

/// Configuration manager for loading and saving monitor settings.
///
/// Settings are layered, lowest precedence first:
/// - Compiled-in defaults ([`MonitorSettings::default`])
/// - The YAML settings file (`.docwarden.yaml` in the project root, or an explicit path)
/// - `DOCWARDEN_*` environment variables; list keys take comma-separated values
#[derive(Debug, Clone)]
pub struct ConfigManager {
    settings_path: Utf8PathBuf,
    explicit_path: bool,
    environment: Option<HashMap<String, String>>,
}

impl ConfigManager {
    /// Create a ConfigManager that looks for `.docwarden.yaml` in `project_root`.
    pub fn new<P: AsRef<Utf8Path>>(project_root: P) -> Self {
        Self {
            settings_path: project_root.as_ref().join(SETTINGS_FILENAME),
            explicit_path: false,
            environment: None,
        }
    }

    /// Use an explicit settings file. Unlike the default location, it must exist.
    pub fn with_settings_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.settings_path = path.as_ref().to_path_buf();
        self.explicit_path = true;
        self
    }

    /// Read overrides from `vars` instead of the process environment.
    pub fn with_environment(mut self, vars: HashMap<String, String>) -> Self {
        self.environment = Some(vars);
        self
    }

    /// Load settings from defaults, the settings file and the environment.
    ///
    /// # Errors
    ///
    /// Fails if an explicit settings file is missing, or if the file or an
    /// environment override cannot be parsed.
    pub fn load_settings(&self) -> Result<MonitorSettings> {
        if self.explicit_path && !self.settings_path.exists() {
            bail!("Settings file not found: {}", self.settings_path);
        }

        if self.settings_path.exists() {
            tracing::info!("Loading settings from {}", self.settings_path);
        } else {
            tracing::debug!(
                "No settings file at {}, using defaults",
                self.settings_path
            );
        }

        let mut environment = Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .list_separator(",");
        for key in LIST_KEYS {
            environment = environment.with_list_parse_key(key);
        }
        if let Some(vars) = &self.environment {
            environment = environment.source(Some(vars.clone().into_iter().collect()));
        }

        let settings: MonitorSettings = Config::builder()
            .add_source(
                File::from(self.settings_path.as_std_path())
                    .format(FileFormat::Yaml)
                    .required(self.explicit_path),
            )
            .add_source(environment)
            .build()
            .with_context(|| format!("Failed to load settings: {}", self.settings_path))?
            .try_deserialize()
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        tracing::debug!(
            docs_folder = %settings.docs_folder,
            keywords = settings.keywords.len(),
            doc_extensions = settings.doc_extensions.len(),
            exempt_directories = settings.exempt_directories.len(),
            "Settings resolved"
        );
        Ok(settings)
    }

    /// Save settings as YAML to the settings path.
    pub fn save_settings(&self, settings: &MonitorSettings) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(settings).context("Failed to serialize settings to YAML")?;

        fs::write(&self.settings_path, yaml_string)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }

    /// Get the settings file path.
    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(&root).with_environment(HashMap::new());
        (manager, temp_dir)
    }

    #[test]
    fn test_settings_path_in_project_root() {
        let (manager, temp_dir) = create_test_config_manager();
        assert_eq!(
            manager.settings_path().as_std_path(),
            temp_dir.path().join(".docwarden.yaml")
        );
    }

    #[test]
    fn test_defaults_without_file() {
        let (manager, _temp_dir) = create_test_config_manager();
        let settings = manager.load_settings().unwrap();
        assert_eq!(settings, MonitorSettings::default());
    }

    #[test]
    fn test_load_save_settings() {
        let (manager, _temp_dir) = create_test_config_manager();

        let mut settings = MonitorSettings::default();
        settings.docs_folder = "documentation".to_string();
        settings.project_name = Some("Vistara UI".to_string());
        manager.save_settings(&settings).unwrap();

        let loaded = manager.load_settings().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let (manager, temp_dir) = create_test_config_manager();
        let missing = Utf8PathBuf::try_from(temp_dir.path().join("custom.yaml")).unwrap();

        let result = manager.with_settings_file(&missing).load_settings();
        assert!(result.is_err());
    }
}
