//! Temperature anomaly against a fixed reference window.

use clima_indices::AnnualMetricRow;
use clima_stats::mean_present;
use tracing::{info, warn};

/// Inclusive year window whose mean annual temperature is the anomaly
/// reference.
///
/// The default is every year up to and including 1980.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnomalyWindow {
    start: Option<i32>,
    end: i32,
}

impl AnomalyWindow {
    /// Creates a window covering every year up to `end`.
    pub fn up_to(end: i32) -> Self {
        Self { start: None, end }
    }

    /// Creates a window covering `start..=end`.
    pub fn between(start: i32, end: i32) -> Self {
        Self {
            start: Some(start),
            end,
        }
    }

    /// Returns the first year, or `None` when open-ended.
    pub fn start(&self) -> Option<i32> {
        self.start
    }

    /// Returns the last year (inclusive).
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Returns `true` if `year` lies in the window.
    pub fn contains(&self, year: i32) -> bool {
        year <= self.end && self.start.is_none_or(|s| year >= s)
    }
}

impl Default for AnomalyWindow {
    fn default() -> Self {
        Self::up_to(1980)
    }
}

/// Fills `anomaly` on every row and returns the reference mean.
///
/// The reference is the mean of the defined `temp_mean_annual` values of the
/// rows inside `window`. When no such value exists every anomaly is `None`
/// and `None` is returned; there is no fallback to another period.
pub fn apply_anomaly(rows: &mut [AnnualMetricRow], window: &AnomalyWindow) -> Option<f64> {
    let reference = mean_present(
        rows.iter()
            .filter(|r| window.contains(r.year))
            .map(|r| r.temp_mean_annual),
    );
    match reference {
        Some(mean) => info!(reference_mean = mean, end = window.end(), "anomaly reference"),
        None => warn!(end = window.end(), "no annual means in anomaly window, anomalies undefined"),
    }
    for row in rows.iter_mut() {
        row.anomaly = reference.and_then(|r| row.temp_mean_annual.map(|t| t - r));
    }
    reference
}
