//! Shared helpers: report output, logging and number parsing

pub mod io;
pub mod logging;

/// Parse the leading run of ASCII digits in `s`, ignoring leading whitespace
/// and an optional `+` sign. Anything after the digits is ignored.
///
/// Returns `None` when no digit follows, when the value is negative, or when
/// it does not fit in a `u64`.
#[must_use]
pub fn parse_leading_integer(s: &str) -> Option<u64> {
    let trimmed = s.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }
    unsigned[..digits_end].parse().ok()
}
