// docwarden - keeps project documentation inside its documentation folder
//
// This is the library crate containing the scan engine and its configuration.
// The binary crate (main.rs) provides the command line entry point.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use metrics::ScanMetrics;
pub use models::{MonitorSettings, ScanConfig, ScanResult, ViolationRecord};
pub use services::{Classifier, LocationFilter, ReportError, Reporter, ScanError, Scanner, scan};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
