//! Settings loader with multi-source merging

use super::settings::{LogSettings, SettingsError};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Project-level settings file names, checked in order.
const PROJECT_FILES: [&str; 2] = ["sinklog.toml", ".sinklog.toml"];

/// Explicit log directory, taken verbatim.
const LOG_DIR_VAR: &str = "LOG_DIR";

/// Workspace root; logs go to `<value>/logs/current`.
const ROS_WORKSPACE_VAR: &str = "ROS_WORKSPACE";

/// Loads [`LogSettings`] from files and the environment
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `LOG_DIR` / `ROS_WORKSPACE` environment variables
    /// 2. `SINKLOG_*` environment variables
    /// 3. Explicit settings path (if provided)
    /// 4. Project root: `./sinklog.toml` or `./.sinklog.toml`
    /// 5. Global: `$XDG_CONFIG_HOME/sinklog/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&Path>) -> Result<LogSettings, SettingsError> {
        let settings: LogSettings = Self::figment(config_path)
            .extract()
            .map_err(Box::new)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Settings from defaults and the environment only.
    ///
    /// Never fails: unreadable values are reported and defaults are used,
    /// but `LOG_DIR` and `ROS_WORKSPACE` are still honored.
    pub fn from_env() -> LogSettings {
        let figment = Figment::new()
            .merge(Serialized::defaults(LogSettings::default()))
            .merge(Self::env_providers());

        match figment.extract::<LogSettings>() {
            Ok(settings) if settings.validate().is_ok() => settings,
            Ok(settings) => {
                warn!("Ignoring invalid logging settings from environment: {:?}", settings);
                Self::directory_defaults()
            }
            Err(e) => {
                warn!("Could not read logging settings from environment: {}", e);
                Self::directory_defaults()
            }
        }
    }

    /// Default settings with only the directory variables applied.
    fn directory_defaults() -> LogSettings {
        LogSettings {
            log_dir: env_path(LOG_DIR_VAR),
            ros_workspace: env_path(ROS_WORKSPACE_VAR),
            ..LogSettings::default()
        }
    }

    /// The merged figment before extraction.
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(LogSettings::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env_providers())
    }

    /// `SINKLOG_*` values, then the directory variables on top.
    ///
    /// `Env` parses values (`2024` becomes an integer), so the directory
    /// variables bypass it and are merged as paths.
    fn env_providers() -> Figment {
        let mut figment = Figment::new().merge(Env::prefixed("SINKLOG_"));
        if let Some(dir) = env_path(LOG_DIR_VAR) {
            figment = figment.merge(Serialized::default("log_dir", dir));
        }
        if let Some(workspace) = env_path(ROS_WORKSPACE_VAR) {
            figment = figment.merge(Serialized::default("ros_workspace", workspace));
        }
        figment
    }

    /// Get the global settings file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sinklog").join("config.toml"))
    }

    /// Get the project-level settings file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}

/// Value of `name` as a path; empty values count as unset.
fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use sinklog_domain::Severity;

    #[test]
    fn test_log_dir_beats_workspace() {
        Jail::expect_with(|jail| {
            jail.set_env("LOG_DIR", "/data/override");
            jail.set_env("ROS_WORKSPACE", "/home/dev/ws");

            let settings = SettingsLoader::from_env();
            assert_eq!(settings.resolve_directory(), PathBuf::from("/data/override"));
            Ok(())
        });
    }

    #[test]
    fn test_directory_variables_are_taken_verbatim() {
        Jail::expect_with(|jail| {
            jail.set_env("LOG_DIR", "2024");
            jail.set_env("ROS_WORKSPACE", "/home/dev/ws");

            let settings = SettingsLoader::from_env();
            assert_eq!(settings.resolve_directory(), PathBuf::from("2024"));

            let settings = SettingsLoader::load(None).expect("settings should load");
            assert_eq!(settings.log_dir, Some(PathBuf::from("2024")));
            assert_eq!(settings.resolve_directory(), PathBuf::from("2024"));

            jail.set_env("LOG_DIR", "true");
            assert_eq!(
                SettingsLoader::from_env().resolve_directory(),
                PathBuf::from("true")
            );
            Ok(())
        });
    }

    #[test]
    fn test_numeric_workspace_is_a_path() {
        Jail::expect_with(|jail| {
            jail.set_env("ROS_WORKSPACE", "42");

            let settings = SettingsLoader::load(None).expect("settings should load");
            assert_eq!(settings.resolve_directory(), PathBuf::from("42/logs/current"));
            Ok(())
        });
    }

    #[test]
    fn test_empty_log_dir_falls_through_to_workspace() {
        Jail::expect_with(|jail| {
            jail.create_file("sinklog.toml", r#"app_name = "from_file""#)?;
            jail.set_env("LOG_DIR", "");
            jail.set_env("ROS_WORKSPACE", "/home/dev/ws");

            let settings = SettingsLoader::load(None).expect("settings should load");
            assert_eq!(settings.log_dir, None);
            assert_eq!(
                settings.resolve_directory(),
                PathBuf::from("/home/dev/ws/logs/current")
            );
            Ok(())
        });
    }

    #[test]
    fn test_bad_prefixed_value_keeps_log_dir() {
        Jail::expect_with(|jail| {
            jail.set_env("SINKLOG_DEFAULT_MIN_SEVERITY", "loud");
            jail.set_env("LOG_DIR", "/data/logs");

            let settings = SettingsLoader::from_env();
            assert_eq!(settings.resolve_directory(), PathBuf::from("/data/logs"));
            assert_eq!(settings.default_min_severity, Severity::Debug);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_prefixed_value_keeps_workspace() {
        Jail::expect_with(|jail| {
            jail.set_env("SINKLOG_SUMMARY_FILE", "a/b");
            jail.set_env("ROS_WORKSPACE", "/home/dev/ws");

            let settings = SettingsLoader::from_env();
            assert_eq!(
                settings.resolve_directory(),
                PathBuf::from("/home/dev/ws/logs/current")
            );
            assert_eq!(settings.summary_file, crate::config::SUMMARY_FILE_NAME);
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_env_values() {
        Jail::expect_with(|jail| {
            jail.set_env("SINKLOG_APP_NAME", "two_stage_int");
            jail.set_env("SINKLOG_DEFAULT_MIN_SEVERITY", "WARN");

            let settings = SettingsLoader::from_env();
            assert_eq!(settings.app_name, "two_stage_int");
            assert_eq!(settings.default_min_severity, Severity::Warn);
            Ok(())
        });
    }

    #[test]
    fn test_project_file_is_merged_below_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "sinklog.toml",
                r#"
                log_dir = "/from/file"
                app_name = "from_file"
                "#,
            )?;
            jail.set_env("LOG_DIR", "/from/env");

            let settings = SettingsLoader::load(None).expect("settings should load");
            assert_eq!(settings.log_dir, Some(PathBuf::from("/from/env")));
            assert_eq!(settings.app_name, "from_file");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", r#"summary_file = "EVERYTHING.log""#)?;

            let settings = SettingsLoader::load(Some(Path::new("custom.toml")))
                .expect("settings should load");
            assert_eq!(settings.summary_file, "EVERYTHING.log");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_file_is_reported() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", r#"summary_file = "a/b.log""#)?;

            let result = SettingsLoader::load(Some(Path::new("custom.toml")));
            assert!(matches!(result, Err(SettingsError::InvalidSummaryFile(_))));
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_mentions_app() {
        if let Some(path) = SettingsLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("sinklog"));
        }
    }
}
