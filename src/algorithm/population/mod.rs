//! Population ranking by generation
//!
//! This module turns census single-age population rows into a ranking of
//! decade-based generations.

pub mod extraction;
pub mod filters;
pub mod generation;
pub mod ranking;
pub mod report;
pub mod statistics;

// Re-export commonly used items
pub use extraction::{AgePopulation, ClassifiedPopulation, Extraction};
pub use filters::{FilterCriteria, PopulationRow, RowFilter};
pub use generation::Generation;
pub use ranking::{GenerationRanking, run};
pub use report::format_ranking;
pub use statistics::{GenerationTotal, PipelineStats, PopulationStatistics};
