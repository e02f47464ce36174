//! File sinks and the sink registry.
//!
//! Provides [`FileSink`], an append-only file writer implementing the
//! [`LogSink`](sinklog_application::LogSink) port, and [`SinkRegistry`],
//! which implements [`SinkProvider`](sinklog_application::SinkProvider)
//! on top of a log directory:
//!
//! ```text
//! <log_dir>/
//! ├── ALL_LOGS_SUMMARY.log   every routed record
//! ├── Planner.log            records logged under "Planner"
//! └── CONTROLLER.log         records logged under "CONTROLLER"
//! ```

mod file_sink;
mod registry;

pub use file_sink::FileSink;
pub use registry::SinkRegistry;
