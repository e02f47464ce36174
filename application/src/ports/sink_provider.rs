//! Port for looking up per-module sinks and the summary sink.

use super::log_sink::LogSink;
use sinklog_domain::{LogExport, Severity};
use std::path::Path;
use std::sync::Arc;

/// Owner of every sink a process writes to.
///
/// Implementations create module sinks lazily and must hand out the same
/// sink for the same module name for their whole lifetime.
pub trait SinkProvider: Send + Sync {
    /// Sink for `module`, created with `min_severity` on first use.
    ///
    /// Returns `None` when the sink cannot be created.
    fn logger(&self, module: &str, min_severity: Severity) -> Option<Arc<dyn LogSink>>;

    /// The sink that receives every record regardless of module.
    fn summary(&self) -> Arc<dyn LogSink>;

    /// Directory all sink files live in.
    fn log_directory(&self) -> &Path;

    /// Locations of every sink created so far.
    fn export_logs(&self) -> LogExport;

    /// Close every sink. Called once at teardown; must be idempotent.
    fn close_all(&self) {}
}
