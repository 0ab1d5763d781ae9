//! # clima-trend
//!
//! Two independent trend estimators for a year-ordered annual series:
//!
//! - [`rank_trend`]: Kendall's tau-b between time order and value, with a
//!   two-sided significance test (exact permutation distribution for small
//!   untied samples, tie-corrected normal approximation otherwise).
//! - [`linear_trend`]: ordinary least squares against the year, with a
//!   Student's t p-value for the slope.
//!
//! Both skip missing values and report insufficient data instead of failing
//! when fewer than three points remain.

mod linear;
mod rank;

pub use linear::{LinearTrend, linear_trend};
pub use rank::{RankTrend, TrendDirection, rank_trend};

/// Fewest non-missing points for which a trend is estimated.
pub const MIN_POINTS: usize = 3;
