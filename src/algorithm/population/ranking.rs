//! Generation ranking pipeline
//!
//! Composes the stages: filter the census rows, extract populations, classify
//! them into generations, sum per generation and rank the sums.

use std::time::Instant;

use crate::config::RankingConfig;
use crate::error::Result;
use crate::reader::{RawRecord, read_records};
use crate::utils::io::write_report;

use super::extraction::{classify_populations, extract_age_populations};
use super::filters::{RowFilter, filter_population_rows};
use super::report::format_ranking;
use super::statistics::{GenerationTotal, PipelineStats, PopulationStatistics};

/// Generations ranked by population, largest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRanking {
    entries: Vec<GenerationTotal>,
    stats: PipelineStats,
}

impl GenerationRanking {
    /// Rank the generations found in `records`
    ///
    /// # Errors
    /// Returns an error for invalid populations (per the configured policy),
    /// unknown age labels and arithmetic overflow
    pub fn from_records(records: &[RawRecord], config: &RankingConfig) -> Result<Self> {
        let rows = filter_population_rows(records, &RowFilter::total_population());
        log::info!("Selected {} of {} records", rows.len(), records.len());

        let extraction =
            extract_age_populations(&rows, config.population_unit, config.invalid_population)?;
        let classified = classify_populations(extraction.pairs)?;
        let totals = PopulationStatistics::aggregate_by_generation(&classified)?;
        let entries = PopulationStatistics::rank_descending(totals);

        let stats = PipelineStats {
            records_read: records.len(),
            rows_selected: rows.len(),
            rows_skipped: extraction.skipped,
            generation_count: entries.len(),
            total_population: PopulationStatistics::total_population(&entries)?,
        };

        Ok(Self { entries, stats })
    }

    /// Ranked totals, highest population first
    #[must_use]
    pub fn entries(&self) -> &[GenerationTotal] {
        &self.entries
    }

    /// Counts gathered while ranking
    #[must_use]
    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    /// The ranking as report text
    #[must_use]
    pub fn render(&self) -> String {
        format_ranking(&self.entries)
    }
}

/// Read the source, rank the generations and write the report
///
/// Nothing is written unless every stage succeeds.
///
/// # Errors
/// Returns the first read, data or write failure
pub fn run(config: &RankingConfig) -> Result<GenerationRanking> {
    let start = Instant::now();
    log::info!("{config}");

    let records = read_records(&config.source_path, config.has_headers)?;
    let ranking = GenerationRanking::from_records(&records, config)?;
    write_report(&config.output_path, &ranking.render(), config.atomic_write)?;

    log::info!("Ranking complete in {:?}: {}", start.elapsed(), ranking.stats());
    Ok(ranking)
}
