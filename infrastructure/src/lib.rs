//! Infrastructure layer for sinklog
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including settings loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{LogSettings, SUMMARY_FILE_NAME, SettingsError, SettingsLoader};
pub use logging::{FileSink, SinkRegistry};
