//! Core domain concepts shared across all layers.
//!
//! - [`severity::Severity`]: ordered log levels used for sink thresholds
//! - [`record::LogRecord`]: one formatted message and where it came from
//! - [`export::LogExport`]: snapshot of sink file locations
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod export;
pub mod record;
pub mod severity;
