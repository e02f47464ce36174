//! Logging settings (`sinklog.toml` / environment)

use serde::{Deserialize, Serialize};
use sinklog_domain::Severity;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the summary sink inside the log directory.
pub const SUMMARY_FILE_NAME: &str = "ALL_LOGS_SUMMARY.log";

/// Application name used for the fallback directory (`<temp>/<app>_logs`).
pub const DEFAULT_APP_NAME: &str = "sinklog";

/// Errors produced while loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load logging settings: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("app_name must not be empty")]
    EmptyAppName,

    #[error("summary_file must be a plain file name, got '{0}'")]
    InvalidSummaryFile(String),
}

/// Settings that control where sinks are created and how they write.
///
/// `log_dir` and `ros_workspace` come from the `LOG_DIR` and
/// `ROS_WORKSPACE` environment variables; the remaining fields can be set
/// in `sinklog.toml` or through `SINKLOG_*` variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Explicit base directory (highest priority)
    pub log_dir: Option<PathBuf>,
    /// Workspace root; logs go to `<ros_workspace>/logs/current`
    pub ros_workspace: Option<PathBuf>,
    /// Used to name the fallback directory
    pub app_name: String,
    /// Name of the summary file inside the log directory
    pub summary_file: String,
    /// Threshold for module sinks created by the router
    pub default_min_severity: Severity,
    /// Call `sync_data` after every record
    pub sync_data: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            log_dir: None,
            ros_workspace: None,
            app_name: DEFAULT_APP_NAME.to_string(),
            summary_file: SUMMARY_FILE_NAME.to_string(),
            default_min_severity: Severity::Debug,
            sync_data: false,
        }
    }
}

impl LogSettings {
    /// Settings that write into `dir` and leave everything else at defaults.
    pub fn in_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    /// Base directory for all sinks.
    ///
    /// `log_dir` wins, then `<ros_workspace>/logs/current`, then
    /// `<temp>/<app_name>_logs`. Empty values count as unset.
    pub fn resolve_directory(&self) -> PathBuf {
        if let Some(dir) = non_empty(self.log_dir.as_deref()) {
            return dir.to_path_buf();
        }
        if let Some(workspace) = non_empty(self.ros_workspace.as_deref()) {
            return workspace.join("logs").join("current");
        }
        std::env::temp_dir().join(format!("{}_logs", self.app_name))
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.app_name.trim().is_empty() {
            return Err(SettingsError::EmptyAppName);
        }
        let summary = self.summary_file.as_str();
        if summary.trim().is_empty() || summary.contains(['/', '\\']) {
            return Err(SettingsError::InvalidSummaryFile(self.summary_file.clone()));
        }
        Ok(())
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}
