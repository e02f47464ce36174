//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Module name must not be empty")]
    EmptyModuleName,

    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),
}
