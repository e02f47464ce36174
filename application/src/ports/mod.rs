//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod export_reporter;
pub mod log_sink;
pub mod sink_provider;
