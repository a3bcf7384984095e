//! Logging for the two file stages of a ranking run

use std::fmt;
use std::path::Path;
use std::time::Duration;

/// File-touching stage of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStage {
    /// Reading census rows from the source CSV
    ReadSource,
    /// Writing the ranking report
    WriteReport,
}

impl FileStage {
    fn unit(self) -> &'static str {
        match self {
            Self::ReadSource => "census rows",
            Self::WriteReport => "ranking lines",
        }
    }
}

impl fmt::Display for FileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadSource => write!(f, "Reading census rows from"),
            Self::WriteReport => write!(f, "Writing ranking report to"),
        }
    }
}

/// Log that a stage is about to touch `path`
pub fn log_stage_start(stage: FileStage, path: &Path) {
    log::info!("{stage} {}", path.display());
}

/// Log a finished stage with the number of rows or lines handled
pub fn log_stage_complete(stage: FileStage, path: &Path, count: usize, elapsed: Duration) {
    log::info!(
        "{}: {count} {} in {elapsed:?}",
        path.display(),
        stage.unit()
    );
}

/// Log a recoverable problem, optionally tied to a file
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}
