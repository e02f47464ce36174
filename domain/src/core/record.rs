//! Log record and source location value objects

use super::error::DomainError;
use super::severity::Severity;
use crate::util::{base_file_name, current_timestamp};
use std::fmt;
use std::panic::Location;

/// Where a log call was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Location of the caller of the function this is invoked from.
    ///
    /// Functions that want their own caller recorded must themselves be
    /// annotated with `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }

    /// File name without its directory prefix.
    pub fn file_name(&self) -> &str {
        base_file_name(&self.file)
    }
}

impl From<&Location<'_>> for SourceLocation {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name(), self.line)
    }
}

/// A single, already formatted log message on its way to the sinks.
///
/// Records are built per call and rendered to one line; they are never
/// stored.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: String,
    pub severity: Severity,
    pub module: String,
    pub location: SourceLocation,
    pub message: String,
}

impl LogRecord {
    /// Create a record stamped with the current local time.
    pub fn new(
        severity: Severity,
        module: impl Into<String>,
        location: SourceLocation,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: current_timestamp(),
            severity,
            module: module.into(),
            location,
            message: message.into(),
        }
    }

    /// Override the timestamp (used when replaying or in tests).
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Render the record as it appears on disk, without the trailing newline:
    /// `[timestamp] [SEVERITY] [module] file:line - message`
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] [{}] {} - {}",
            self.timestamp, self.severity, self.module, self.location, self.message
        )
    }
}

/// Check that a module name can be used to route records.
///
/// Only the empty name is refused; any other name, whitespace included,
/// is used as-is for the file name.
pub fn validate_module_name(module: &str) -> Result<&str, DomainError> {
    if module.is_empty() {
        return Err(DomainError::EmptyModuleName);
    }
    Ok(module)
}
