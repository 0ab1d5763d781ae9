//! Statistical helper functions for the clima workspace.
//!
//! Missing values are never represented as NaN here: callers filter
//! `Option<f64>` inputs down to the present values first, and helpers that
//! cannot produce a value on empty input return `None` rather than 0.

pub mod runs;

pub use runs::{days_in_qualifying_runs, longest_run, run_lengths};

/// Arithmetic mean of a slice. Returns `None` if empty.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: f64 = data.iter().sum();
    Some(sum / data.len() as f64)
}

/// Arithmetic mean of the present values, or `None` if none are present.
pub fn mean_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values.into_iter().flatten() {
        sum += v;
        n += 1;
    }
    if n == 0 { None } else { Some(sum / n as f64) }
}

/// Linear-interpolation quantile (Hyndman & Fan type 7).
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Percentile (0..=100) of unsorted values using linear interpolation.
///
/// Returns `None` if `values` is empty. Sorts a copy of the input.
pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(quantile_type7(&sorted, pct / 100.0))
}

/// Rounds `x` to `decimals` decimal places (half away from zero).
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (x * factor).round() / factor
}

/// [`round_to`] lifted over an optional value.
pub fn round_opt(x: Option<f64>, decimals: u32) -> Option<f64> {
    x.map(|v| round_to(v, decimals))
}
