//! Data models for docwarden.
//!
//! - [`MonitorSettings`]: Serializable defaults and overrides loaded from `.docwarden.yaml`
//!   and the environment
//! - [`ScanConfig`]: The resolved, immutable configuration for one scan
//! - [`ViolationRecord`]: A documentation file found outside the allowed locations
//! - [`ScanResult`]: All violations from one scan, in walk order, with run metrics

pub mod config;
pub mod violation;

pub use config::{
    DEFAULT_DOCS_FOLDER, DEFAULT_REPORT_FILENAME, MonitorSettings, ScanConfig,
    normalize_extension,
};
pub use violation::{ScanResult, ViolationRecord};
