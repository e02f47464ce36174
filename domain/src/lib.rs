//! Domain layer for sinklog
//!
//! This crate contains the value objects every other layer shares:
//! severities, log records, the on-disk line format and export snapshots.
//! It has no knowledge of files, locks or configuration.
//!
//! # Line format
//!
//! Every sink writes one record per line:
//!
//! ```text
//! [YYYY-MM-DD HH:MM:SS.mmm] [LEVEL] [MODULE] file:line - message
//! ```
//!
//! ```
//! use sinklog_domain::{LogRecord, Severity, SourceLocation};
//!
//! let record = LogRecord::new(
//!     Severity::Info,
//!     "Planner",
//!     SourceLocation::new("src/planner.rs", 12),
//!     "This is an info message: 42",
//! )
//! .with_timestamp("2024-11-08 09:15:02.007");
//!
//! assert_eq!(
//!     record.to_line(),
//!     "[2024-11-08 09:15:02.007] [INFO] [Planner] planner.rs:12 - This is an info message: 42"
//! );
//! ```

pub mod core;
pub mod util;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    export::{LogExport, ModuleLogFile},
    record::{LogRecord, SourceLocation, validate_module_name},
    severity::{Severity, severity_name},
};
pub use util::{base_file_name, current_timestamp};
