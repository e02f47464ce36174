//! Route Log use case.
//!
//! The entry point callers log through. Each record goes to its module's
//! sink and, independently, to the summary sink:
//!
//! 1. Resolve (lazily create) the module sink
//! 2. Write the record there if the sink exists
//! 3. Write the record to the summary sink regardless of steps 1 and 2
//!
//! The two writes are separate critical sections; nothing here is atomic
//! across sinks. Failures are absorbed and only show up as missing lines.

use crate::ports::log_sink::LogSink;
use crate::ports::sink_provider::SinkProvider;
use sinklog_domain::{LogRecord, Severity, SourceLocation, validate_module_name};
use std::sync::Arc;
use tracing::debug;

/// Which sinks actually stored a routed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delivery {
    /// The module file received the line.
    pub module: bool,
    /// The summary file received the line.
    pub summary: bool,
}

/// Routes formatted messages to per-module sinks and the summary sink.
pub struct LogRouter {
    provider: Arc<dyn SinkProvider>,
    default_min_severity: Severity,
}

impl Clone for LogRouter {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            default_min_severity: self.default_min_severity,
        }
    }
}

impl LogRouter {
    pub fn new(provider: Arc<dyn SinkProvider>) -> Self {
        Self {
            provider,
            default_min_severity: Severity::Debug,
        }
    }

    /// Threshold given to module sinks this router creates.
    pub fn with_default_min_severity(mut self, severity: Severity) -> Self {
        self.default_min_severity = severity;
        self
    }

    pub fn provider(&self) -> &Arc<dyn SinkProvider> {
        &self.provider
    }

    /// Log an already formatted message.
    ///
    /// Never fails: an unavailable module sink is skipped, and the summary
    /// sink is written either way.
    pub fn log(
        &self,
        module: &str,
        severity: Severity,
        location: SourceLocation,
        message: impl Into<String>,
    ) -> Delivery {
        let record = LogRecord::new(severity, module, location, message);
        self.route(&record)
    }

    /// Route a prebuilt record.
    pub fn route(&self, record: &LogRecord) -> Delivery {
        let mut delivery = Delivery::default();

        let module_sink = match validate_module_name(&record.module) {
            Ok(module) => self.provider.logger(module, self.default_min_severity),
            Err(e) => {
                debug!("Skipping module sink: {}", e);
                None
            }
        };

        if let Some(sink) = module_sink {
            delivery.module = write_to(sink.as_ref(), record);
        }

        delivery.summary = write_to(self.provider.summary().as_ref(), record);
        delivery
    }

    #[track_caller]
    pub fn debug(&self, module: &str, message: impl Into<String>) -> Delivery {
        self.log(module, Severity::Debug, SourceLocation::caller(), message)
    }

    #[track_caller]
    pub fn info(&self, module: &str, message: impl Into<String>) -> Delivery {
        self.log(module, Severity::Info, SourceLocation::caller(), message)
    }

    #[track_caller]
    pub fn warn(&self, module: &str, message: impl Into<String>) -> Delivery {
        self.log(module, Severity::Warn, SourceLocation::caller(), message)
    }

    #[track_caller]
    pub fn error(&self, module: &str, message: impl Into<String>) -> Delivery {
        self.log(module, Severity::Error, SourceLocation::caller(), message)
    }
}

/// Write to one sink, reporting whether a line was stored.
fn write_to(sink: &dyn LogSink, record: &LogRecord) -> bool {
    if !sink.accepts(record.severity) {
        return false;
    }
    match sink.write(record) {
        Ok(()) => true,
        Err(e) => {
            debug!("Dropped log record for [{}]: {}", record.module, e);
            false
        }
    }
}
