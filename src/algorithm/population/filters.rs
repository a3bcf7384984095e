//! Population row filtering criteria
//!
//! Census CSV rows mix several statistics (sex breakdowns, labour force,
//! all-ages totals). These filters keep only the unisex total-population
//! rows for a single age and turn them into typed [`PopulationRow`]s.

use crate::reader::RawRecord;

/// Field holding the sex category
pub const SEX_FIELD: usize = 1;
/// Field holding the population category
pub const CATEGORY_FIELD: usize = 3;
/// Field holding the age label
pub const AGE_FIELD: usize = 5;
/// Field holding the population count, in thousands
pub const POPULATION_FIELD: usize = 11;
/// Shortest row that can carry a population count
pub const MIN_FIELD_COUNT: usize = POPULATION_FIELD + 1;

/// Sex category for rows that are not broken down by sex
pub const BOTH_SEXES: &str = "男女計";
/// Population category for the overall population statistic
pub const TOTAL_POPULATION: &str = "総人口";
/// Age label of the pre-aggregated all-ages row
pub const ALL_AGES: &str = "総数";

/// Defines a criterion for filtering entities
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A filter that can be applied to a raw CSV record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowFilter {
    /// Row has at least this many fields
    MinFields(usize),
    /// Field at `index` exists and equals `value`
    FieldEquals {
        /// Field position
        index: usize,
        /// Required content
        value: String,
    },
    /// Field at `index` is absent or differs from `value`
    FieldNotEquals {
        /// Field position
        index: usize,
        /// Rejected content
        value: String,
    },
    /// Combined filter that requires all criteria to be met
    All(Vec<RowFilter>),
    /// Combined filter that requires any criterion to be met
    Any(Vec<RowFilter>),
}

impl RowFilter {
    /// Rows with the unisex total population for one single age
    #[must_use]
    pub fn total_population() -> Self {
        Self::All(vec![
            Self::MinFields(MIN_FIELD_COUNT),
            Self::FieldEquals {
                index: SEX_FIELD,
                value: BOTH_SEXES.to_string(),
            },
            Self::FieldEquals {
                index: CATEGORY_FIELD,
                value: TOTAL_POPULATION.to_string(),
            },
            Self::FieldNotEquals {
                index: AGE_FIELD,
                value: ALL_AGES.to_string(),
            },
        ])
    }
}

impl Default for RowFilter {
    fn default() -> Self {
        Self::total_population()
    }
}

impl FilterCriteria<RawRecord> for RowFilter {
    fn meets_criteria(&self, record: &RawRecord) -> bool {
        match self {
            Self::MinFields(count) => record.len() >= *count,
            Self::FieldEquals { index, value } => record.field(*index) == Some(value.as_str()),
            Self::FieldNotEquals { index, value } => record.field(*index) != Some(value.as_str()),
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(record)),
            Self::Any(filters) => filters.iter().any(|f| f.meets_criteria(record)),
        }
    }
}

/// A selected census row with its fields named
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationRow {
    /// 1-based position of the record among all source records
    pub record: usize,
    /// Sex category
    pub sex: String,
    /// Population category
    pub category: String,
    /// Age label such as `0歳` or `100歳以上`
    pub age_label: String,
    /// Population count as written in the source, in thousands
    pub population: String,
}

impl PopulationRow {
    /// Name the fields of the `position`-th source record; `None` if it is
    /// too short
    #[must_use]
    pub fn from_record(position: usize, record: &RawRecord) -> Option<Self> {
        Some(Self {
            record: position,
            sex: record.field(SEX_FIELD)?.to_string(),
            category: record.field(CATEGORY_FIELD)?.to_string(),
            age_label: record.field(AGE_FIELD)?.to_string(),
            population: record.field(POPULATION_FIELD)?.to_string(),
        })
    }
}

/// Keep the records meeting `filter`, in input order, as typed rows
///
/// Rows that fail the filter, or are too short to name, are dropped silently.
#[must_use]
pub fn filter_population_rows<'a, I>(records: I, filter: &RowFilter) -> Vec<PopulationRow>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    records
        .into_iter()
        .enumerate()
        .filter(|(_, record)| filter.meets_criteria(record))
        .filter_map(|(idx, record)| PopulationRow::from_record(idx + 1, record))
        .collect()
}
