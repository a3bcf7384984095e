//! Configuration for the generation ranking job.

use std::fmt;
use std::path::PathBuf;

/// Default location of the census CSV
pub const DEFAULT_SOURCE_PATH: &str = "popu_source.csv";

/// Default location of the ranking report
pub const DEFAULT_OUTPUT_PATH: &str = "popu_ranking.txt";

/// Source population values are recorded in thousands
pub const DEFAULT_POPULATION_UNIT: u64 = 1000;

/// What to do with a selected row whose population field does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidValuePolicy {
    /// Abort the run, naming the offending row
    #[default]
    FailFast,
    /// Drop the row and log a warning
    SkipAndWarn,
}

impl fmt::Display for InvalidValuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FailFast => write!(f, "fail fast"),
            Self::SkipAndWarn => write!(f, "skip and warn"),
        }
    }
}

/// Configuration for a ranking run
#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Census CSV to read
    pub source_path: PathBuf,
    /// Report file to (over)write
    pub output_path: PathBuf,
    /// Whether the first CSV line is a header rather than data
    pub has_headers: bool,
    /// Multiplier applied to the parsed population field
    pub population_unit: u64,
    /// Handling of unparseable population fields
    pub invalid_population: InvalidValuePolicy,
    /// Write through a temporary file and rename on success
    pub atomic_write: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            has_headers: true,
            population_unit: DEFAULT_POPULATION_UNIT,
            invalid_population: InvalidValuePolicy::default(),
            atomic_write: true,
        }
    }
}

impl fmt::Display for RankingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ranking Configuration:")?;
        writeln!(f, "  Source: {}", self.source_path.display())?;
        writeln!(f, "  Output: {}", self.output_path.display())?;
        writeln!(f, "  Header Row: {}", self.has_headers)?;
        writeln!(f, "  Population Unit: {}", self.population_unit)?;
        writeln!(f, "  Invalid Population: {}", self.invalid_population)?;
        writeln!(f, "  Atomic Write: {}", self.atomic_write)
    }
}
