use anyhow::{Result, bail};
use camino::Utf8Path;
use docwarden::{ConfigManager, MonitorSettings};

/// Write the default settings file. Refuses to overwrite unless `force` is set.
pub fn init(project_root: &Utf8Path, config_path: Option<&Utf8Path>, force: bool) -> Result<()> {
    if !project_root.is_dir() {
        bail!("Project root not found or not a directory: {}", project_root);
    }

    let mut manager = ConfigManager::new(project_root);
    if let Some(path) = config_path {
        manager = manager.with_settings_file(path);
    }

    if manager.settings_path().exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            manager.settings_path()
        );
    }

    manager.save_settings(&MonitorSettings::default())?;
    println!("✨ Wrote default settings to {}", manager.settings_path());
    Ok(())
}
