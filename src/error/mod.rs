//! Error handling for the generation ranking pipeline.

use std::io;
use std::path::{Path, PathBuf};

pub mod util;

/// Specialized error type for the ranking pipeline
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    /// Error opening, reading or writing a file
    #[error("IO error: {context}{}", display_path(.path))]
    Io {
        /// What the file was needed for
        context: String,
        /// Path involved in the failure, if known
        path: Option<PathBuf>,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Malformed delimited input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Population field without a usable leading integer
    #[error("Invalid population value {value:?} for age {age_label:?} (source record {record})")]
    InvalidPopulation {
        /// 1-based position of the record among all source records
        record: usize,
        /// Age label of the offending row
        age_label: String,
        /// Raw field content
        value: String,
    },

    /// Age label that maps to no generation bucket
    #[error("Unknown age label: {0:?}")]
    UnknownAgeLabel(String),

    /// Population arithmetic exceeded `u64`
    #[error("Population overflow while summing {0}")]
    Overflow(String),
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

impl RankingError {
    /// Wrap an IO error with a description of what was being done
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            path: None,
            source,
        }
    }

    /// Attach a path to an IO error; other variants are returned unchanged
    #[must_use]
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Io {
                context, source, ..
            } => Self::Io {
                context,
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

impl From<io::Error> for RankingError {
    fn from(error: io::Error) -> Self {
        Self::io("unexpected IO failure", error)
    }
}

/// Result type for ranking operations
pub type Result<T> = std::result::Result<T, RankingError>;
