//! Snapshot of where a registry's sinks write to

use std::fmt;
use std::path::PathBuf;

/// A module sink location inside a [`LogExport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLogFile {
    pub module: String,
    pub path: PathBuf,
}

/// Locations of every sink file at the time of export.
///
/// Module entries are ordered by module name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogExport {
    pub directory: PathBuf,
    pub summary: PathBuf,
    pub modules: Vec<ModuleLogFile>,
}

impl LogExport {
    /// Every file path in the export, summary first.
    pub fn all_paths(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.summary).chain(self.modules.iter().map(|m| &m.path))
    }
}

impl fmt::Display for LogExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Logs exported to: {}", self.directory.display())?;
        writeln!(f, "  * Summary: {}", self.summary.display())?;
        for module in &self.modules {
            writeln!(f, "  - {}", module.path.display())?;
        }
        Ok(())
    }
}
