//! Population statistics per generation
//!
//! This module sums classified populations per generation bucket and ranks
//! the resulting totals.

use std::fmt;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::error::{RankingError, Result};

use super::extraction::ClassifiedPopulation;
use super::generation::Generation;

/// Summed population of one generation bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTotal {
    /// The bucket
    pub generation: Generation,
    /// Sum of the populations classified into it
    pub population: u64,
}

/// Functions for generation totals and rankings
pub struct PopulationStatistics;

impl PopulationStatistics {
    /// Sum populations per generation
    ///
    /// One total per generation that occurs in `classified`, ordered by first
    /// occurrence.
    ///
    /// # Errors
    /// Returns `Overflow` if a generation's sum exceeds `u64`
    pub fn aggregate_by_generation(
        classified: &[ClassifiedPopulation],
    ) -> Result<Vec<GenerationTotal>> {
        let mut sums: FxHashMap<Generation, u64> = FxHashMap::default();
        for pair in classified {
            let sum = sums.entry(pair.generation).or_insert(0);
            *sum = sum
                .checked_add(pair.population)
                .ok_or_else(|| RankingError::Overflow(pair.generation.label().to_string()))?;
        }

        let totals = classified
            .iter()
            .map(|pair| pair.generation)
            .unique()
            .map(|generation| GenerationTotal {
                generation,
                population: sums.get(&generation).copied().unwrap_or_default(),
            })
            .collect_vec();

        log::debug!("Aggregated {} rows into {} generations", classified.len(), totals.len());
        Ok(totals)
    }

    /// Sort totals by population, largest first
    ///
    /// Stable: equal populations keep their input order.
    #[must_use]
    pub fn rank_descending(mut totals: Vec<GenerationTotal>) -> Vec<GenerationTotal> {
        totals.sort_by(|a, b| b.population.cmp(&a.population));
        totals
    }

    /// Population across all totals
    ///
    /// # Errors
    /// Returns `Overflow` if the grand total exceeds `u64`
    pub fn total_population(totals: &[GenerationTotal]) -> Result<u64> {
        totals.iter().try_fold(0u64, |acc, t| {
            acc.checked_add(t.population)
                .ok_or_else(|| RankingError::Overflow("all generations".to_string()))
        })
    }
}

/// Row counts gathered while ranking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Records read from the source
    pub records_read: usize,
    /// Records passing the row filter
    pub rows_selected: usize,
    /// Selected rows dropped for an invalid population
    pub rows_skipped: usize,
    /// Distinct generations in the ranking
    pub generation_count: usize,
    /// Population across all generations
    pub total_population: u64,
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records read, {} selected, {} skipped, {} generations, {} people",
            self.records_read,
            self.rows_selected,
            self.rows_skipped,
            self.generation_count,
            self.total_population
        )
    }
}
