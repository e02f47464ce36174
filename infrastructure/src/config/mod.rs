//! Logging settings loading for sinklog
//!
//! This module handles file I/O and merging of settings from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LOG_DIR` / `ROS_WORKSPACE` environment variables
//! 2. `SINKLOG_*` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./sinklog.toml` or `./.sinklog.toml`
//! 5. Global: `$XDG_CONFIG_HOME/sinklog/config.toml`
//! 6. Default values

mod loader;
mod settings;

pub use loader::SettingsLoader;
pub use settings::{DEFAULT_APP_NAME, LogSettings, SUMMARY_FILE_NAME, SettingsError};
