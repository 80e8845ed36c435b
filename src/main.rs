//! docwarden - keeps project documentation inside its documentation folder
//!
//! Command line entry point.
//!
//! # Execution Flow
//!
//! 1. Parse arguments and initialize logging (stderr, plus rotating files with `--log-dir`)
//! 2. Load settings: defaults, then `.docwarden.yaml`, then `DOCWARDEN_*` variables
//! 3. Walk the project, classify files and collect misplaced documentation
//! 4. Print the Markdown report and save it into the documentation folder
//!
//! # Exit Status
//!
//! - `0`: no misplaced documentation
//! - `1`: one or more misplaced documentation files
//! - `2`: the scan could not run or the report could not be saved

mod cli;
mod commands;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use docwarden::{APP_NAME, VERSION};
use std::process::exit;

fn main() {
    let cli = Cli::parse();

    let guard = match docwarden::logging::setup_logging(cli.verbose, cli.log_dir.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit(2);
        }
    };

    tracing::debug!("Starting {} v{}", APP_NAME, VERSION);

    let result = match &cli.command {
        Some(Commands::Scan(args)) => {
            commands::scan::scan(args, cli.config.as_deref()).map(|result| result.exit_code())
        }
        Some(Commands::Init {
            project_root,
            force,
        }) => commands::init::init(project_root, cli.config.as_deref(), *force).map(|_| 0),
        None => {
            let _ = Cli::command().print_help();
            exit(0);
        }
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    // Flush file logs before exiting
    drop(guard);
    exit(code);
}
