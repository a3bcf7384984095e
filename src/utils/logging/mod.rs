//! Logging utilities for output and progress tracking

pub mod log;
pub mod progress;

pub use self::log::{FileStage, log_stage_complete, log_stage_start, log_warning};
pub use self::progress::{create_spinner, finish_and_clear};
