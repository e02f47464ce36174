//! Console output for exported sink locations

use colored::Colorize;
use sinklog_application::ExportReporter;
use sinklog_domain::LogExport;

/// Formats a [`LogExport`] for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Directory, then the summary file (`*`), then each module file (`-`).
    pub fn format_export(export: &LogExport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Logs exported to:".cyan().bold(),
            export.directory.display()
        ));
        output.push_str(&format!(
            "  {} {}\n",
            "* Summary:".yellow().bold(),
            export.summary.display()
        ));
        for module in &export.modules {
            output.push_str(&format!("  - {}\n", module.path.display()));
        }

        output
    }
}

/// Turn off ANSI colors for everything this crate prints.
pub fn disable_color() {
    colored::control::set_override(false);
}

/// Prints the export to stdout when the host shuts down.
pub struct ConsoleExportReporter {
    enabled: bool,
}

impl ConsoleExportReporter {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Reporter that stays silent (e.g. for `--quiet` style hosts).
    pub fn silent() -> Self {
        Self { enabled: false }
    }
}

impl Default for ConsoleExportReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportReporter for ConsoleExportReporter {
    fn report(&self, export: &LogExport) {
        if self.enabled {
            print!("{}", ConsoleFormatter::format_export(export));
        }
    }
}
