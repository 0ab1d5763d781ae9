//! Threshold estimation.

use clima_calendar::{DAYS_IN_LEAP_YEAR, Doy, circular_window};
use clima_series::{DailySeries, Variable};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::BaselineConfig;
use crate::error::BaselineError;
use crate::threshold::CalendarThreshold;

/// Builds the calendar-day percentile threshold of `variable`.
///
/// For each day `d` the pool holds every present value from the baseline
/// years whose day-of-year falls in the circular window around `d`. Pools
/// with at least `min_pool` values yield their type-7 percentile; smaller
/// pools fall back to the exact-day values, and a day with no exact-day
/// values is undefined. Days are estimated in parallel and the result does
/// not depend on scheduling.
///
/// Data outside the baseline years never influences the result. A baseline
/// with no rows is not an error: every day is undefined.
///
/// # Errors
///
/// Returns [`BaselineError::InvalidConfig`] if `config` fails validation.
#[tracing::instrument(skip_all, fields(variable = %variable, percentile = config.percentile()))]
pub fn build_calendar_threshold(
    series: &DailySeries,
    variable: Variable,
    config: &BaselineConfig,
) -> Result<CalendarThreshold, BaselineError> {
    config.validate()?;

    let baseline = series.year_span(config.start_year(), config.end_year());
    if baseline.is_empty() {
        warn!(
            start = config.start_year(),
            end = config.end_year(),
            "no observations in baseline period, every threshold undefined"
        );
    }

    // Present baseline values grouped by day-of-year (index 0 = day 1).
    let mut by_day: Vec<Vec<f64>> = vec![Vec::new(); DAYS_IN_LEAP_YEAR as usize];
    for obs in baseline {
        if let Some(v) = obs.value(variable) {
            by_day[usize::from(obs.day_of_year) - 1].push(v);
        }
    }

    let windows: Vec<Vec<Doy>> = Doy::all()
        .map(|d| circular_window(d, config.window_radius()))
        .collect::<Result<_, _>>()?;

    let pct = config.percentile();
    let min_pool = config.min_pool();
    let estimates: Vec<(Option<f64>, bool)> = windows
        .par_iter()
        .enumerate()
        .map(|(day_idx, window)| estimate_day(&by_day, day_idx, window, pct, min_pool))
        .collect();
    let n_fallback = estimates.iter().filter(|(_, fell_back)| *fell_back).count();
    let values = estimates.into_iter().map(|(value, _)| value).collect();

    let threshold = CalendarThreshold::from_values(variable, pct, values);
    debug!(n_fallback, "exact-day fallbacks");
    info!(
        n_baseline_days = baseline.len(),
        n_defined = threshold.n_defined(),
        "calendar threshold built"
    );
    Ok(threshold)
}

/// Threshold of the day at `day_idx` from its window, and whether the window
/// pool was too small so the exact-day pool was used instead.
fn estimate_day(
    by_day: &[Vec<f64>],
    day_idx: usize,
    window: &[Doy],
    pct: f64,
    min_pool: usize,
) -> (Option<f64>, bool) {
    let pool: Vec<f64> = window
        .iter()
        .flat_map(|d| by_day[d.index()].iter().copied())
        .collect();
    if pool.len() >= min_pool {
        (clima_stats::percentile(&pool, pct), false)
    } else {
        (clima_stats::percentile(&by_day[day_idx], pct), true)
    }
}

/// Percentile (0..=100) of every present value of `variable` in the whole
/// record, or `None` if the variable was never observed.
pub fn scalar_percentile(series: &DailySeries, variable: Variable, percentile: f64) -> Option<f64> {
    let values: Vec<f64> = series.values(variable).collect();
    clima_stats::percentile(&values, percentile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use clima_series::DailyObservation;

    fn series_of(points: &[(i32, u32, u32, f64)]) -> DailySeries {
        let obs = points
            .iter()
            .map(|&(y, m, d, v)| {
                let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
                DailyObservation::new(date, Some(v), Some(v - 10.0), Some(v - 5.0), Some(0.0))
            })
            .collect();
        DailySeries::new(obs).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let series = series_of(&[(1970, 1, 1, 10.0)]);
        let config = BaselineConfig::new().with_percentile(150.0);
        let result = build_calendar_threshold(&series, Variable::TempMax, &config);
        assert!(matches!(result, Err(BaselineError::InvalidConfig { .. })));
    }

    #[test]
    fn empty_baseline_is_all_undefined() {
        let series = series_of(&[(2000, 1, 1, 10.0), (2001, 1, 1, 12.0)]);
        let t = build_calendar_threshold(&series, Variable::TempMax, &BaselineConfig::default())
            .unwrap();
        assert_eq!(t.n_defined(), 0);
    }

    #[test]
    fn single_value_pool_returns_that_value() {
        let series = series_of(&[(1975, 3, 15, 17.5)]);
        let t = build_calendar_threshold(&series, Variable::TempMax, &BaselineConfig::default())
            .unwrap();
        let day = Doy::from_date(NaiveDate::from_ymd_opt(1975, 3, 15).unwrap());
        assert_relative_eq!(t.get(day).unwrap(), 17.5);
        assert_eq!(t.n_defined(), 1);
    }

    #[test]
    fn scalar_percentile_over_full_record() {
        let series = series_of(&[
            (1950, 1, 1, 1.0),
            (1970, 1, 1, 2.0),
            (2000, 1, 1, 3.0),
            (2020, 1, 1, 4.0),
            (2021, 1, 1, 5.0),
        ]);
        let p = scalar_percentile(&series, Variable::TempMax, 95.0).unwrap();
        assert_relative_eq!(p, 4.8, epsilon = 1e-12);
        assert!(scalar_percentile(&DailySeries::default(), Variable::TempMax, 95.0).is_none());
    }

    #[test]
    fn estimate_day_reports_fallback() {
        let mut by_day = vec![Vec::new(); DAYS_IN_LEAP_YEAR as usize];
        by_day[9] = vec![1.0, 2.0, 3.0];
        by_day[10] = vec![4.0];
        let window = circular_window(Doy::new(10).unwrap(), 2).unwrap();

        let (value, fell_back) = estimate_day(&by_day, 9, &window, 50.0, 10);
        assert!(fell_back);
        assert_relative_eq!(value.unwrap(), 2.0);

        let (value, fell_back) = estimate_day(&by_day, 9, &window, 50.0, 4);
        assert!(!fell_back);
        assert_relative_eq!(value.unwrap(), 2.5);

        let (value, fell_back) = estimate_day(&by_day, 200, &window, 50.0, 10);
        assert!(fell_back);
        assert_eq!(value, None);
    }
}
