//! Presentation layer for sinklog
//!
//! This crate contains CLI definitions and console output for the
//! export report printed at shutdown.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, LevelArg};
pub use output::console::{ConsoleExportReporter, ConsoleFormatter, disable_color};
