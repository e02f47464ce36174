//! Append-only log file sink.
//!
//! Each record is rendered to one line and handed to the OS with a single
//! `write_all` while holding the sink's lock. `File` is unbuffered, so the
//! line is visible to readers as soon as `write` returns; there is no
//! separate flush step. Reaching the disk is only guaranteed when
//! [`FileSink::with_sync_data`] is enabled.

use sinklog_application::{LogSink, SinkError};
use sinklog_domain::{LogRecord, Severity};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;

/// Log sink writing to one file.
///
/// Thread-safe via `Mutex<Option<File>>`. `None` means the file never
/// opened or has been closed; writes then fail with
/// [`SinkError::NotWritable`].
pub struct FileSink {
    path: PathBuf,
    min_severity: Severity,
    sync_data: bool,
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    ///
    /// Never fails. If the file cannot be opened the sink is returned in a
    /// non-writable state and a warning is logged.
    pub fn open(path: impl AsRef<Path>, min_severity: Severity) -> Self {
        let path = path.as_ref();

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Some(f),
            Err(e) => {
                warn!("Cannot open log file {}: {}", path.display(), e);
                None
            }
        };

        Self {
            path: path.to_path_buf(),
            min_severity,
            sync_data: false,
            file: Mutex::new(file),
        }
    }

    /// Also call `sync_data` after every record, so each line reaches the
    /// disk before `write` returns.
    pub fn with_sync_data(mut self, sync_data: bool) -> Self {
        self.sync_data = sync_data;
        self
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    /// Release the file. Later calls and later writes are no-ops.
    pub fn close(&self) {
        drop(self.lock().take());
    }

    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        // Lines are written whole, so a poisoned lock holds no partial state.
        self.file.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl LogSink for FileSink {
    fn write(&self, record: &LogRecord) -> Result<(), SinkError> {
        if !self.accepts(record.severity) {
            return Ok(());
        }

        let mut line = record.to_line();
        line.push('\n');

        let mut guard = self.lock();
        let Some(file) = guard.as_mut() else {
            return Err(SinkError::NotWritable {
                path: self.path.clone(),
            });
        };

        file.write_all(line.as_bytes())
            .map_err(|e| self.io_error(e))?;

        if self.sync_data {
            file.sync_data().map_err(|e| self.io_error(e))?;
        }
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn min_severity(&self) -> Severity {
        self.min_severity
    }

    fn is_writable(&self) -> bool {
        self.is_open()
    }

    fn close(&self) {
        FileSink::close(self);
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use sinklog_domain::SourceLocation;
    use std::fs;
    use std::sync::Arc;
    use std::thread;

    fn record(severity: Severity, message: &str) -> LogRecord {
        LogRecord::new(
            severity,
            "Planner",
            SourceLocation::new("src/planner/plan.rs", 42),
            message,
        )
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_writes_one_line_in_stable_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Planner.log");
        let sink = FileSink::open(&path, Severity::Debug);

        sink.write(&record(Severity::Info, "This is an info message: 42"))
            .unwrap();

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        let re = Regex::new(
            r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}\] \[INFO\] \[Planner\] plan\.rs:42 - This is an info message: 42$",
        )
        .unwrap();
        assert!(re.is_match(&lines[0]), "{}", lines[0]);
    }

    #[test]
    fn test_visible_without_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Planner.log");
        let sink = FileSink::open(&path, Severity::Debug);

        sink.write(&record(Severity::Warn, "first")).unwrap();
        assert_eq!(read_lines(&path).len(), 1);
        sink.write(&record(Severity::Warn, "second")).unwrap();
        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Planner.log");
        fs::write(&path, "previous run\n").unwrap();

        let sink = FileSink::open(&path, Severity::Debug);
        sink.write(&record(Severity::Error, "this run")).unwrap();

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "previous run");
        assert!(lines[1].ends_with(" - this run"));
    }

    #[test]
    fn test_below_threshold_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CUSTOM_MODULE.log");
        let sink = FileSink::open(&path, Severity::Warn);

        sink.write(&record(Severity::Debug, "dropped")).unwrap();
        sink.write(&record(Severity::Info, "dropped")).unwrap();
        sink.write(&record(Severity::Warn, "kept")).unwrap();

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[WARN]"));
    }

    #[test]
    fn test_open_failure_degrades_to_not_writable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("Planner.log");
        let sink = FileSink::open(&path, Severity::Debug);

        assert!(!sink.is_writable());
        assert!(matches!(
            sink.write(&record(Severity::Error, "lost")),
            Err(SinkError::NotWritable { .. })
        ));
        // Below threshold is still a silent no-op.
        let quiet = FileSink::open(&path, Severity::Error);
        assert!(quiet.write(&record(Severity::Info, "lost")).is_ok());
        assert!(!path.exists());
    }

    #[test]
    fn test_close_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Planner.log");
        let sink = FileSink::open(&path, Severity::Debug);

        sink.write(&record(Severity::Info, "before close")).unwrap();
        sink.close();
        sink.close();
        LogSink::close(&sink);

        assert!(!sink.is_open());
        assert!(sink.write(&record(Severity::Info, "after close")).is_err());
        assert_eq!(read_lines(&path).len(), 1);
    }

    #[test]
    fn test_sync_data_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Planner.log");
        let sink = FileSink::open(&path, Severity::Debug).with_sync_data(true);

        sink.write(&record(Severity::Info, "durable")).unwrap();
        assert_eq!(read_lines(&path).len(), 1);
    }

    #[test]
    fn test_concurrent_writers_never_interleave() {
        const THREADS: usize = 8;
        const WRITES: usize = 250;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Planner.log");
        let sink = Arc::new(FileSink::open(&path, Severity::Debug));

        thread::scope(|s| {
            for t in 0..THREADS {
                let sink = Arc::clone(&sink);
                s.spawn(move || {
                    for i in 0..WRITES {
                        let message = format!("thread {t} write {i} {}", "x".repeat(64));
                        sink.write(&record(Severity::Info, &message)).unwrap();
                    }
                });
            }
        });

        let lines = read_lines(&path);
        assert_eq!(lines.len(), THREADS * WRITES);
        let re = Regex::new(
            r"^\[[^\]]+\] \[INFO\] \[Planner\] plan\.rs:42 - thread \d+ write \d+ x{64}$",
        )
        .unwrap();
        assert!(lines.iter().all(|line| re.is_match(line)));
    }
}
