//! CLI entrypoint for sinklog
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use sinklog_application::{ExportGuard, LogRouter, sink_debug, sink_error, sink_info, sink_warn};
use sinklog_domain::{Severity, SourceLocation};
use sinklog_infrastructure::{SettingsLoader, SinkRegistry};
use sinklog_presentation::{Cli, Command, ConsoleExportReporter};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never mix with sink files
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        sinklog_presentation::disable_color();
    }

    let mut settings = SettingsLoader::load(cli.config.as_deref())
        .context("Failed to load logging settings")?;
    if let Some(dir) = &cli.log_dir {
        settings.log_dir = Some(dir.clone());
    }

    // === Dependency Injection ===
    let registry = Arc::new(SinkRegistry::new(&settings));
    let router = registry.router();
    info!("Logging to {}", registry.log_directory().display());

    if let Command::Where = cli.command {
        println!("{}", registry.log_directory().display());
        println!("{}", registry.summary_sink().path().display());
        return Ok(());
    }

    let guard = ExportGuard::new(registry.clone(), Box::new(ConsoleExportReporter::new()));

    match cli.command {
        Command::Log {
            module,
            level,
            message,
            min_level,
        } => {
            if let Some(min_level) = min_level {
                open_module_sink(&registry, &module, min_level.into());
            }
            router.log(&module, level.into(), SourceLocation::caller(), message);
        }
        Command::Demo => demonstrate(&registry, &router),
        Command::Where => {}
    }

    guard.finish();
    Ok(())
}

/// Create `module`'s sink with `min_severity` ahead of the first message.
///
/// Returns false when the sink could not be opened; the message then only
/// reaches the summary file.
fn open_module_sink(registry: &SinkRegistry, module: &str, min_severity: Severity) -> bool {
    match registry.get_logger(module, min_severity) {
        Some(_) => true,
        None => {
            warn!(
                "Could not open log file for module '{}' in {}",
                module,
                registry.log_directory().display()
            );
            false
        }
    }
}

/// Writes the sample set: DEMO at every severity, plus a WARN-threshold sink.
fn demonstrate(registry: &SinkRegistry, router: &LogRouter) {
    sink_info!(router, "DEMO", "This is a demo info message");
    sink_warn!(router, "DEMO", "This is a warning, value: {}", 123);
    sink_error!(router, "DEMO", "This is an error message");
    sink_debug!(router, "DEMO", "This is a debug message");
    sink_info!(router, "DEMO", "This also goes to the module log and the summary log");

    if let Some(sink) = registry.get_logger("CUSTOM_MODULE", Severity::Warn) {
        sink_warn!(
            router,
            "CUSTOM_MODULE",
            "Logged through a sink created with WARN threshold ({})",
            sink.path().display()
        );
        sink_info!(router, "CUSTOM_MODULE", "Below the module threshold, summary only");
    }

    info!(
        "Demo finished, summary at {}",
        registry.summary_sink().path().display()
    );
}
