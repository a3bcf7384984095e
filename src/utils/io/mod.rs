//! Text sink for the ranking report

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{RankingError, Result};
use crate::utils::logging::{FileStage, log_stage_complete, log_stage_start, log_warning};

/// Sibling path used while a report is being written
#[must_use]
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_and_sync(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path)
        .map_err(|e| RankingError::io("Failed to create report file", e).with_path(path))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| RankingError::io("Failed to write report", e).with_path(path))?;
    file.sync_all()
        .map_err(|e| RankingError::io("Failed to flush report", e).with_path(path))
}

fn discard_temp(temp_path: &Path) {
    if temp_path.exists() && fs::remove_file(temp_path).is_err() {
        log_warning("Could not remove temporary report", Some(temp_path));
    }
}

/// Write `contents` to `path`, replacing any previous file
///
/// With `atomic` set the text goes to a temporary sibling first and is renamed
/// over the target once fully flushed, so a failure leaves the old file (or no
/// file) rather than a truncated report.
///
/// # Errors
/// Returns an error if the file cannot be created, written, synced or renamed
pub fn write_report(path: &Path, contents: &str, atomic: bool) -> Result<()> {
    log_stage_start(FileStage::WriteReport, path);
    let start = Instant::now();

    if atomic {
        let temp_path = temp_path_for(path);
        let moved = write_and_sync(&temp_path, contents).and_then(|()| {
            fs::rename(&temp_path, path).map_err(|e| {
                RankingError::io("Failed to move report into place", e).with_path(path)
            })
        });
        if let Err(e) = moved {
            discard_temp(&temp_path);
            return Err(e);
        }
    } else {
        write_and_sync(path, contents)?;
    }

    log_stage_complete(FileStage::WriteReport, path, contents.lines().count(), start.elapsed());
    Ok(())
}
