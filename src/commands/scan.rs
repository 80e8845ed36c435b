use crate::cli::ScanArgs;
use anyhow::{Context, Result};
use camino::Utf8Path;
use chrono::Local;
use docwarden::{ConfigManager, Reporter, ScanConfig, ScanResult, scan as scan_project};

/// Run a scan, print and save the report, and return the scan result.
pub fn scan(args: &ScanArgs, config_path: Option<&Utf8Path>) -> Result<ScanResult> {
    let mut manager = ConfigManager::new(&args.project_root);
    if let Some(path) = config_path {
        manager = manager.with_settings_file(path);
    }
    let mut settings = manager.load_settings()?;
    if let Some(docs_folder) = &args.docs_folder {
        settings.docs_folder = docs_folder.clone();
    }

    let config = ScanConfig::new(&args.project_root, &settings)?;

    if !args.quiet {
        println!("📚 docwarden - {}", config.project_name());
        println!("🔍 Scanning project: {}", config.project_root());
        println!("📁 Documentation folder: {}", config.docs_folder());
        println!("{}", "-".repeat(60));
    }

    let result = scan_project(&config);

    let reporter = Reporter::from_config(&config);
    let report = reporter.render_report(&result.violations, Local::now());

    if !args.quiet {
        println!("{}", report);
    }

    if !args.no_save {
        let filename = if args.timestamped {
            None
        } else {
            Some(args.output.as_deref().unwrap_or(&settings.report_filename))
        };
        let report_path = reporter
            .save_report(&report, filename)
            .context("Scan finished but the report could not be saved")?;
        if !args.quiet {
            println!("\n💾 Report saved to: {}", report_path);
        }
    }

    if !args.quiet {
        if result.is_clean() {
            println!("\n✅ All documentation is in the right place!");
        } else {
            println!(
                "\n🚨 Found {} misplaced documentation file(s)!",
                result.len()
            );
            println!("📝 See the report for details");
        }
    }

    Ok(result)
}
