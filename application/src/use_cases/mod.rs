//! Use cases
//!
//! Application-level operations that orchestrate the sink ports.

pub mod route_log;
pub mod shutdown;
