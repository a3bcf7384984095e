//! Ranking report rendering

use super::statistics::GenerationTotal;

/// Suffix after the rank number
pub const RANK_SUFFIX: &str = "位";

/// Render ranked totals as `<rank>位: <label> <population>` lines
///
/// Ranks start at 1 and follow the order of `ranked`; every line, the last
/// included, ends with a newline.
#[must_use]
pub fn format_ranking(ranked: &[GenerationTotal]) -> String {
    let mut out = String::new();
    for (idx, total) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{}{RANK_SUFFIX}: {} {}\n",
            idx + 1,
            total.generation.label(),
            total.population
        ));
    }
    out
}
