//! Generation buckets and age-label classification

use std::fmt;

use crate::error::{RankingError, Result};
use crate::utils::parse_leading_integer;

/// Unit suffix on age labels (`0歳`)
pub const AGE_UNIT: &str = "歳";
/// Modifier on the open-ended top age label (`100歳以上`)
pub const OR_OLDER: &str = "以上";

/// Decade-based age bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Generation {
    /// Ages 0-9
    UnderTen,
    /// Ages 10-19
    Teens,
    /// Ages 20-29
    Twenties,
    /// Ages 30-39
    Thirties,
    /// Ages 40-49
    Forties,
    /// Ages 50-59
    Fifties,
    /// Ages 60-69
    Sixties,
    /// Ages 70-79
    Seventies,
    /// Ages 80-89
    Eighties,
    /// Ages 90-99
    Nineties,
    /// Ages 100 and over
    HundredAndOver,
}

impl Generation {
    /// Every bucket, youngest first
    #[must_use]
    pub const fn all() -> [Self; 11] {
        [
            Self::UnderTen,
            Self::Teens,
            Self::Twenties,
            Self::Thirties,
            Self::Forties,
            Self::Fifties,
            Self::Sixties,
            Self::Seventies,
            Self::Eighties,
            Self::Nineties,
            Self::HundredAndOver,
        ]
    }

    /// Bucket for an age in years
    #[must_use]
    pub const fn from_age(age: u64) -> Self {
        match age {
            0..=9 => Self::UnderTen,
            10..=19 => Self::Teens,
            20..=29 => Self::Twenties,
            30..=39 => Self::Thirties,
            40..=49 => Self::Forties,
            50..=59 => Self::Fifties,
            60..=69 => Self::Sixties,
            70..=79 => Self::Seventies,
            80..=89 => Self::Eighties,
            90..=99 => Self::Nineties,
            _ => Self::HundredAndOver,
        }
    }

    /// Report label for the bucket
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderTen => "10歳未満",
            Self::Teens => "10代",
            Self::Twenties => "20代",
            Self::Thirties => "30代",
            Self::Forties => "40代",
            Self::Fifties => "50代",
            Self::Sixties => "60代",
            Self::Seventies => "70代",
            Self::Eighties => "80代",
            Self::Nineties => "90代",
            Self::HundredAndOver => "100歳以上",
        }
    }

    /// Classify an age label such as `37歳` or `100歳以上`
    ///
    /// # Errors
    /// Returns `UnknownAgeLabel` when no age can be read from the label
    pub fn classify(age_label: &str) -> Result<Self> {
        let age = age_label.replacen(AGE_UNIT, "", 1).replacen(OR_OLDER, "", 1);
        parse_leading_integer(&age)
            .map(Self::from_age)
            .ok_or_else(|| RankingError::UnknownAgeLabel(age_label.to_string()))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
