//! Severity value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Debug < Info < Warn < Error`, which is what sink thresholds compare on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Fine-grained diagnostic output
    #[default]
    #[serde(alias = "debug")]
    Debug,
    /// Normal progress messages
    #[serde(alias = "info")]
    Info,
    /// Something unexpected that the module recovered from
    #[serde(alias = "warn", alias = "warning")]
    Warn,
    /// A failure the module could not recover from
    #[serde(alias = "error")]
    Error,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Name as written into log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Ordinal used for threshold comparison (`DEBUG = 0` .. `ERROR = 3`).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Build a severity from its ordinal.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Name for a raw ordinal, `"UNKNOWN"` when it is out of range.
    pub fn name_of_ordinal(ordinal: u8) -> &'static str {
        Self::from_ordinal(ordinal).map_or("UNKNOWN", |s| s.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(DomainError::InvalidSeverity(s.to_string())),
        }
    }
}

/// Severity name as written into log lines.
pub fn severity_name(severity: Severity) -> &'static str {
    severity.as_str()
}
