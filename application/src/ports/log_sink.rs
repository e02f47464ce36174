//! Port for a single log destination.
//!
//! A [`LogSink`] receives fully formatted [`LogRecord`]s and appends them
//! somewhere. Sinks apply their own minimum severity; records below it are
//! accepted and silently dropped.

use sinklog_domain::{LogRecord, Severity};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors a sink can report for a single write.
///
/// The router absorbs these; they never reach the host application.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Log sink {} is not writable", .path.display())]
    NotWritable { path: PathBuf },

    #[error("Failed to write to log sink {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    /// Path of the sink that failed.
    pub fn path(&self) -> &Path {
        match self {
            SinkError::NotWritable { path } | SinkError::Io { path, .. } => path,
        }
    }
}

/// Append-only destination for log records.
pub trait LogSink: Send + Sync {
    /// Append one record.
    ///
    /// Returns `Ok(())` without writing when the record is below
    /// [`min_severity`](Self::min_severity).
    fn write(&self, record: &LogRecord) -> Result<(), SinkError>;

    /// Where this sink writes to.
    fn path(&self) -> &Path;

    /// Lowest severity this sink keeps.
    fn min_severity(&self) -> Severity;

    /// Whether writes can currently succeed.
    fn is_writable(&self) -> bool;

    /// Release the underlying resource. Must be safe to call repeatedly.
    fn close(&self) {}

    /// Whether a record of `severity` passes this sink's threshold.
    fn accepts(&self, severity: Severity) -> bool {
        severity >= self.min_severity()
    }
}

/// Sink that discards everything, for tests and disabled logging.
pub struct NoLogSink;

impl LogSink for NoLogSink {
    fn write(&self, _record: &LogRecord) -> Result<(), SinkError> {
        Ok(())
    }

    fn path(&self) -> &Path {
        Path::new("")
    }

    fn min_severity(&self) -> Severity {
        Severity::Debug
    }

    fn is_writable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Threshold(Severity);

    impl LogSink for Threshold {
        fn write(&self, _record: &LogRecord) -> Result<(), SinkError> {
            Ok(())
        }
        fn path(&self) -> &Path {
            Path::new("threshold.log")
        }
        fn min_severity(&self) -> Severity {
            self.0
        }
        fn is_writable(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_accepts_uses_threshold() {
        let sink = Threshold(Severity::Warn);
        assert!(!sink.accepts(Severity::Debug));
        assert!(!sink.accepts(Severity::Info));
        assert!(sink.accepts(Severity::Warn));
        assert!(sink.accepts(Severity::Error));
    }

    #[test]
    fn test_sink_error_path_and_display() {
        let err = SinkError::NotWritable {
            path: PathBuf::from("/nope/DEMO.log"),
        };
        assert_eq!(err.path(), Path::new("/nope/DEMO.log"));
        assert_eq!(err.to_string(), "Log sink /nope/DEMO.log is not writable");

        let err = SinkError::Io {
            path: PathBuf::from("x.log"),
            source: io::Error::other("disk full"),
        };
        assert!(err.to_string().contains("disk full"));
    }
}
