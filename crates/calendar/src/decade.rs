//! Decade bucketing.

/// Returns the first year of the decade containing `year` (floor division).
///
/// Negative years floor toward minus infinity, so `decade(-1) == -10`.
pub fn decade(year: i32) -> i32 {
    year.div_euclid(10) * 10
}
