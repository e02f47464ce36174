//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use sinklog_domain::Severity;
use std::path::PathBuf;

/// Severity accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LevelArg> for Severity {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Debug => Severity::Debug,
            LevelArg::Info => Severity::Info,
            LevelArg::Warn => Severity::Warn,
            LevelArg::Error => Severity::Error,
        }
    }
}

/// CLI arguments for sinklog
#[derive(Parser, Debug)]
#[command(name = "sinklog")]
#[command(author, version, about = "Route log lines into per-module files and a summary file")]
#[command(long_about = r#"
sinklog writes each message to <log_dir>/<MODULE>.log and to
<log_dir>/ALL_LOGS_SUMMARY.log. Nothing is printed to the terminal
except the list of files written when the program exits.

The log directory is chosen once at startup:
1. --log-dir <path>         Explicit directory
2. $LOG_DIR                 Environment override
3. $ROS_WORKSPACE/logs/current
4. <temp>/sinklog_logs      Fallback

Example:
  sinklog log Planner info "This is an info message: 42"
  LOG_DIR=/tmp/run1 sinklog demo
  sinklog where
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory for log files (overrides LOG_DIR and ROS_WORKSPACE)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Path to settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity of diagnostics on stderr (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write one message to a module file and the summary file
    Log {
        /// Module name; also the log file name
        module: String,

        /// Severity of the message
        #[arg(value_enum)]
        level: LevelArg,

        /// Message text
        message: String,

        /// Minimum severity for the module file if it is created now
        #[arg(long, value_enum, value_name = "LEVEL")]
        min_level: Option<LevelArg>,
    },

    /// Write a set of sample messages at every severity
    Demo,

    /// Print the log directory and summary file, then exit
    Where,
}
