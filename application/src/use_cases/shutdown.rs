//! Shutdown use case.
//!
//! Surfaces the final sink locations and closes every sink when the host
//! is done logging. Hosts either hold an [`ExportGuard`] for the length of
//! `main`, or call [`shutdown`] explicitly on their way out.

use crate::ports::export_reporter::ExportReporter;
use crate::ports::sink_provider::SinkProvider;
use sinklog_domain::LogExport;
use std::sync::Arc;
use tracing::debug;

/// Export the sink locations to `reporter`, then close all sinks.
pub fn shutdown(provider: &dyn SinkProvider, reporter: &dyn ExportReporter) -> LogExport {
    let export = provider.export_logs();
    reporter.report(&export);
    provider.close_all();
    debug!("Closed all log sinks in {}", export.directory.display());
    export
}

/// Runs [`shutdown`] exactly once, on [`finish`](Self::finish) or on drop.
pub struct ExportGuard {
    provider: Arc<dyn SinkProvider>,
    reporter: Box<dyn ExportReporter>,
    finished: bool,
}

impl ExportGuard {
    pub fn new(provider: Arc<dyn SinkProvider>, reporter: Box<dyn ExportReporter>) -> Self {
        Self {
            provider,
            reporter,
            finished: false,
        }
    }

    /// Shut down now and return what was reported.
    pub fn finish(mut self) -> LogExport {
        self.finished = true;
        shutdown(self.provider.as_ref(), self.reporter.as_ref())
    }
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        if !self.finished {
            self.finished = true;
            shutdown(self.provider.as_ref(), self.reporter.as_ref());
        }
    }
}
