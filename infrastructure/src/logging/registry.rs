//! Sink registry - owns the per-module sinks and the summary sink.

use super::file_sink::FileSink;
use crate::config::{LogSettings, SettingsLoader};
use sinklog_application::{LogRouter, LogSink, SinkProvider};
use sinklog_domain::{LogExport, ModuleLogFile, Severity, validate_module_name};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::{debug, info, warn};

/// Registry that maps module names to their [`FileSink`]s.
///
/// The base directory is resolved once, at construction, and never changes.
/// Module sinks are created on first use at `<base>/<module>.log`; the
/// summary sink is created up front and accepts every severity.
///
/// Production code normally uses one registry per process, either built
/// at startup and shared by `Arc`, or through [`SinkRegistry::global`].
pub struct SinkRegistry {
    base_directory: PathBuf,
    default_min_severity: Severity,
    sync_data: bool,
    /// Map of module name -> sink.
    module_sinks: Mutex<BTreeMap<String, Arc<FileSink>>>,
    summary_sink: Arc<FileSink>,
}

impl SinkRegistry {
    /// Build a registry from settings, creating the log directory.
    ///
    /// Directory creation is best effort: if it fails, sinks inside it
    /// simply end up non-writable.
    pub fn new(settings: &LogSettings) -> Self {
        let base_directory = settings.resolve_directory();

        if let Err(e) = fs::create_dir_all(&base_directory) {
            warn!(
                "Could not create log directory {}: {}",
                base_directory.display(),
                e
            );
        }

        let summary_sink = FileSink::open(
            base_directory.join(&settings.summary_file),
            Severity::Debug,
        )
        .with_sync_data(settings.sync_data);

        debug!("Log directory resolved to {}", base_directory.display());

        Self {
            base_directory,
            default_min_severity: settings.default_min_severity,
            sync_data: settings.sync_data,
            module_sinks: Mutex::new(BTreeMap::new()),
            summary_sink: Arc::new(summary_sink),
        }
    }

    /// Registry writing into `dir` with default settings.
    pub fn in_directory(dir: impl Into<PathBuf>) -> Self {
        Self::new(&LogSettings::in_directory(dir))
    }

    /// Registry configured from `LOG_DIR`, `ROS_WORKSPACE` and `SINKLOG_*`.
    pub fn from_env() -> Self {
        Self::new(&SettingsLoader::from_env())
    }

    /// The process-wide registry, built from the environment on first use.
    pub fn global() -> Arc<SinkRegistry> {
        static GLOBAL: OnceLock<Arc<SinkRegistry>> = OnceLock::new();
        GLOBAL
            .get_or_init(|| Arc::new(SinkRegistry::from_env()))
            .clone()
    }

    /// A router that logs through this registry.
    pub fn router(self: &Arc<Self>) -> LogRouter {
        LogRouter::new(self.clone()).with_default_min_severity(self.default_min_severity)
    }

    /// Sink for `module`, created with `min_severity` on first use.
    ///
    /// Lookup and creation happen under one lock, so concurrent callers for
    /// the same name all receive the same sink. `min_severity` only matters
    /// for the call that creates the sink. Returns `None` for an empty
    /// module name or when the file cannot be opened; failed sinks are not
    /// registered, so a later call tries again.
    pub fn get_logger(&self, module: &str, min_severity: Severity) -> Option<Arc<FileSink>> {
        let module = match validate_module_name(module) {
            Ok(module) => module,
            Err(e) => {
                debug!("Refusing module sink: {}", e);
                return None;
            }
        };

        let mut sinks = self.sinks();
        if let Some(sink) = sinks.get(module) {
            return Some(Arc::clone(sink));
        }

        let path = self.module_path(module);
        let sink = FileSink::open(&path, min_severity).with_sync_data(self.sync_data);
        if !sink.is_open() {
            return None;
        }

        let sink = Arc::new(sink);
        sinks.insert(module.to_string(), Arc::clone(&sink));
        Some(sink)
    }

    /// The summary sink (`ALL_LOGS_SUMMARY.log`, threshold DEBUG).
    pub fn summary_sink(&self) -> Arc<FileSink> {
        Arc::clone(&self.summary_sink)
    }

    /// Get the log directory.
    pub fn log_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Threshold the router uses for module sinks it creates.
    pub fn default_min_severity(&self) -> Severity {
        self.default_min_severity
    }

    /// Path a module's sink writes to, whether or not it exists yet.
    pub fn module_path(&self, module: &str) -> PathBuf {
        self.base_directory.join(format!("{module}.log"))
    }

    /// Names of all registered modules, sorted.
    pub fn modules(&self) -> Vec<String> {
        self.sinks().keys().cloned().collect()
    }

    /// Snapshot of every sink location, also emitted at INFO.
    pub fn export_logs(&self) -> LogExport {
        let modules: Vec<ModuleLogFile> = self
            .sinks()
            .iter()
            .map(|(module, sink)| ModuleLogFile {
                module: module.clone(),
                path: sink.path().to_path_buf(),
            })
            .collect();

        let export = LogExport {
            directory: self.base_directory.clone(),
            summary: self.summary_sink.path().to_path_buf(),
            modules,
        };

        info!(
            directory = %export.directory.display(),
            modules = export.modules.len(),
            "Logs exported"
        );
        export
    }

    /// Close every sink. Safe to call more than once.
    pub fn close_all(&self) {
        for sink in self.sinks().values() {
            sink.close();
        }
        self.summary_sink.close();
    }

    fn sinks(&self) -> MutexGuard<'_, BTreeMap<String, Arc<FileSink>>> {
        self.module_sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SinkProvider for SinkRegistry {
    fn logger(&self, module: &str, min_severity: Severity) -> Option<Arc<dyn LogSink>> {
        self.get_logger(module, min_severity)
            .map(|sink| sink as Arc<dyn LogSink>)
    }

    fn summary(&self) -> Arc<dyn LogSink> {
        self.summary_sink()
    }

    fn log_directory(&self) -> &Path {
        SinkRegistry::log_directory(self)
    }

    fn export_logs(&self) -> LogExport {
        SinkRegistry::export_logs(self)
    }

    fn close_all(&self) {
        SinkRegistry::close_all(self);
    }
}
