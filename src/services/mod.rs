//! Services module - the classification and scan engine.
//!
//! Everything here is synchronous and free of CLI concerns, so the same
//! pieces back the binary and the tests.
//!
//! # Components
//!
//! - [`Classifier`]: Decides whether a path names a documentation file, by
//!   extension plus keyword or `readme` prefix on the file name
//! - [`LocationFilter`]: Decides whether a path is inside the docs folder or
//!   below an exempt directory
//! - [`Scanner`]: Walks the project once, feeding regular files through the
//!   classifier and then the location filter, and collects [`ViolationRecord`]s
//! - [`Reporter`]: Renders the Markdown report and saves it into the docs folder
//!
//! # Usage Example
//!
//! ```ignore
//! use docwarden::models::{MonitorSettings, ScanConfig};
//! use docwarden::services::{Reporter, scan};
//!
//! let config = ScanConfig::new("/path/to/project", &MonitorSettings::default())?;
//! let result = scan(&config);
//!
//! let reporter = Reporter::from_config(&config);
//! let report = reporter.render_report(&result.violations, chrono::Local::now());
//! reporter.save_report(&report, Some("latest_documentation_scan.md"))?;
//! std::process::exit(result.exit_code());
//! ```
//!
//! [`ViolationRecord`]: crate::models::ViolationRecord

pub mod classifier;
pub mod location;
pub mod report;
pub mod scanner;

pub use classifier::Classifier;
pub use location::LocationFilter;
pub use report::{ReportError, Reporter, timestamped_filename};
pub use scanner::{ScanError, Scanner, scan};
