use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "docwarden", version)]
#[command(
    about = "Find documentation files that live outside the documentation folder",
    long_about = None
)]
pub struct Cli {
    /// Path to settings file (default: <PROJECT_ROOT>/.docwarden.yaml)
    #[arg(long, short, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Also write daily rotated logs to this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a project for misplaced documentation (exit 1 if any are found)
    Scan(ScanArgs),
    /// Write a default settings file into the project root
    Init {
        /// Project root
        #[arg(env = "DOCWARDEN_PROJECT_ROOT", default_value = ".")]
        project_root: Utf8PathBuf,
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
pub struct ScanArgs {
    /// Project root to scan
    #[arg(env = "DOCWARDEN_PROJECT_ROOT", default_value = ".")]
    pub project_root: Utf8PathBuf,

    /// Documentation folder relative to the project root
    #[arg(long, value_name = "DIR")]
    pub docs_folder: Option<String>,

    /// Report file name inside the documentation folder
    #[arg(long, short, value_name = "NAME", conflicts_with = "timestamped")]
    pub output: Option<String>,

    /// Name the report after the current time instead of overwriting the latest one
    #[arg(long)]
    pub timestamped: bool,

    /// Do not write the report to disk
    #[arg(long, conflicts_with_all = ["output", "timestamped"])]
    pub no_save: bool,

    /// Do not print the report to stdout
    #[arg(long, short)]
    pub quiet: bool,
}
