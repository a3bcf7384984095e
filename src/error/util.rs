//! Utility functions for error handling
//!
//! This module provides utility functions to make error handling more convenient.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{RankingError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
///
/// # Returns
/// * `Result<fs::File>` - The opened file or a detailed error
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if path.exists() && !path.is_file() {
        return Err(RankingError::io(
            format!("Expected a file for: {purpose}"),
            io::Error::new(io::ErrorKind::InvalidInput, "path is not a file"),
        )
        .with_path(path));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                format!("Permission denied while opening file for: {purpose}")
            }
            io::ErrorKind::NotFound => format!("File not found, needed for: {purpose}"),
            _ => format!("Failed to open file for: {purpose}"),
        };
        RankingError::io(context, e).with_path(path)
    })
}
