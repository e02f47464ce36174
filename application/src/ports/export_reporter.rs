//! Port for surfacing sink locations at shutdown.

use sinklog_domain::LogExport;

/// Receives the final [`LogExport`] when the host shuts down.
///
/// Implementations live in the presentation layer (console output) or in
/// tests.
pub trait ExportReporter: Send + Sync {
    fn report(&self, export: &LogExport);
}

/// No-op reporter for when nobody needs to see the locations.
pub struct NoExportReporter;

impl ExportReporter for NoExportReporter {
    fn report(&self, _export: &LogExport) {}
}
