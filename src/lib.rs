//! A Rust library for ranking census population by generation.
//!
//! Reads a census CSV of single-age population counts, buckets ages into
//! decade generations, sums each generation and renders a descending
//! ranking.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod reader;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{InvalidValuePolicy, RankingConfig};
pub use error::{RankingError, Result};
pub use reader::{RawRecord, read_records, read_records_from_reader};

pub use algorithm::population::{
    Generation, GenerationRanking, GenerationTotal, PipelineStats, PopulationStatistics, RowFilter,
    format_ranking, run,
};
