//! Application layer for sinklog
//!
//! This crate contains the log routing use case, the shutdown use case,
//! call-site macros and the port definitions adapters implement.
//! It depends only on the domain layer.

#[macro_use]
mod macros;

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    export_reporter::{ExportReporter, NoExportReporter},
    log_sink::{LogSink, NoLogSink, SinkError},
    sink_provider::SinkProvider,
};
pub use sinklog_domain::{LogRecord, Severity, SourceLocation};
pub use use_cases::route_log::{Delivery, LogRouter};
pub use use_cases::shutdown::{ExportGuard, shutdown};
