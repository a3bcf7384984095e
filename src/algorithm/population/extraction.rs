//! Age/population extraction and generation tagging

use crate::config::InvalidValuePolicy;
use crate::error::{RankingError, Result};
use crate::utils::logging::log_warning;
use crate::utils::parse_leading_integer;

use super::filters::PopulationRow;
use super::generation::Generation;

/// Population of one single-age row, scaled to persons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgePopulation {
    /// Age label as written in the source
    pub age_label: String,
    /// Population in persons
    pub population: u64,
}

/// An [`AgePopulation`] tagged with its generation bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPopulation {
    /// Age label as written in the source
    pub age_label: String,
    /// Population in persons
    pub population: u64,
    /// Bucket the age falls in
    pub generation: Generation,
}

/// Outcome of extracting populations from the filtered rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Rows that produced a population, in input order
    pub pairs: Vec<AgePopulation>,
    /// Rows dropped for an unparseable population field
    pub skipped: usize,
}

/// Project filtered rows to (age label, population) pairs
///
/// The population field is read as a leading integer and multiplied by
/// `unit`. Rows without a usable value abort the run or are skipped,
/// depending on `policy`.
///
/// # Errors
/// Returns `InvalidPopulation` under `FailFast`, or `Overflow` when scaling
/// exceeds `u64`
pub fn extract_age_populations(
    rows: &[PopulationRow],
    unit: u64,
    policy: InvalidValuePolicy,
) -> Result<Extraction> {
    let mut extraction = Extraction {
        pairs: Vec::with_capacity(rows.len()),
        skipped: 0,
    };

    for row in rows {
        let Some(value) = parse_leading_integer(&row.population) else {
            let error = RankingError::InvalidPopulation {
                record: row.record,
                age_label: row.age_label.clone(),
                value: row.population.clone(),
            };
            match policy {
                InvalidValuePolicy::FailFast => return Err(error),
                InvalidValuePolicy::SkipAndWarn => {
                    log_warning(&format!("Skipping row: {error}"), None);
                    extraction.skipped += 1;
                    continue;
                }
            }
        };

        let population = value
            .checked_mul(unit)
            .ok_or_else(|| RankingError::Overflow(row.age_label.clone()))?;

        extraction.pairs.push(AgePopulation {
            age_label: row.age_label.clone(),
            population,
        });
    }

    log::debug!(
        "Extracted {} age populations ({} skipped)",
        extraction.pairs.len(),
        extraction.skipped
    );
    Ok(extraction)
}

/// Tag each pair with its generation, preserving order
///
/// # Errors
/// Returns `UnknownAgeLabel` for the first label that cannot be classified
pub fn classify_populations(pairs: Vec<AgePopulation>) -> Result<Vec<ClassifiedPopulation>> {
    pairs
        .into_iter()
        .map(|pair| {
            let generation = Generation::classify(&pair.age_label)?;
            Ok(ClassifiedPopulation {
                age_label: pair.age_label,
                population: pair.population,
                generation,
            })
        })
        .collect()
}
