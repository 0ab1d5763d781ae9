//! Per-year index computation.

use chrono::NaiveDate;
use clima_calendar::{Doy, decade};
use clima_series::{DailyObservation, Variable};
use clima_stats::{days_in_qualifying_runs, longest_run, mean_present};

use crate::baselines::Baselines;
use crate::config::IndexConfig;
use crate::row::AnnualMetricRow;

/// Computes every annual index of `year` from its observations.
///
/// `observations` must be the date-ordered records of that year, as returned
/// by [`DailySeries::year`](clima_series::DailySeries::year). Spell lengths
/// are measured over consecutive calendar dates: a missing reading or a
/// missing date ends both the current spell and any opposing spell.
///
/// The returned row has `decade` set and `anomaly = None`. No value is
/// rounded.
pub fn compute_year(
    year: i32,
    observations: &[DailyObservation],
    baselines: &Baselines,
    config: &IndexConfig,
) -> AnnualMetricRow {
    debug_assert!(observations.iter().all(|o| o.year == year));

    let tmax = |o: &DailyObservation| o.temp_max;
    let tmin = |o: &DailyObservation| o.temp_min;
    let precip = |o: &DailyObservation| o.precipitation;

    let n_tmax = count_present(observations, Variable::TempMax);
    let n_tmin = count_present(observations, Variable::TempMin);
    let n_precip = count_present(observations, Variable::Precipitation);

    // Threshold counts.
    let su25 = count_if(observations, n_tmax, tmax, |t| t >= config.summer_day());
    let su30 = count_if(observations, n_tmax, tmax, |t| t >= config.hot_day());
    let tr20 = count_if(observations, n_tmin, tmin, |t| t >= config.tropical_night());

    // Means.
    let dtr_mean = mean_present(observations.iter().map(|o| match (o.temp_max, o.temp_min) {
        (Some(hi), Some(lo)) => Some(hi - lo),
        _ => None,
    }));
    let temp_max_mean = mean_present(observations.iter().map(tmax));
    let temp_min_mean = mean_present(observations.iter().map(tmin));
    let temp_mean_annual = mean_present(observations.iter().map(|o| o.temp_mean));

    // Precipitation.
    let wet = config.wet_day();
    let precip_total = (n_precip > 0).then(|| observations.iter().filter_map(precip).sum::<f64>());
    let precip_days = count_if(observations, n_precip, precip, |p| p >= wet);
    let r10mm = count_if(observations, n_precip, precip, |p| p >= config.heavy_precip());
    let r20mm = count_if(observations, n_precip, precip, |p| p >= config.very_heavy_precip());
    let sdii = {
        let wet_amounts: Vec<f64> = observations
            .iter()
            .filter_map(precip)
            .filter(|&p| p >= wet)
            .collect();
        clima_stats::mean(&wet_amounts)
    };
    let rx1day = observations.iter().filter_map(precip).reduce(f64::max);
    let dry_flags = daily_flags(observations, |o| o.precipitation.map(|p| p < wet));
    let wet_flags = daily_flags(observations, |o| o.precipitation.map(|p| p >= wet));
    let cdd = (n_precip > 0).then(|| longest_run(&dry_flags) as u32);
    let cwd = (n_precip > 0).then(|| longest_run(&wet_flags) as u32);

    // Percentile exceedances.
    let tmax_hot = |o: &DailyObservation| baselines.tmax().exceeds(Doy::from_date(o.date), o.temp_max);
    let tmin_hot = |o: &DailyObservation| baselines.tmin().exceeds(Doy::from_date(o.date), o.temp_min);
    let warm_flags = daily_flags(observations, |o| Some(tmax_hot(o)));
    let wsdi_days = (n_tmax > 0)
        .then(|| days_in_qualifying_runs(&warm_flags, config.wsdi_min_duration()) as u32);
    let tx90p = percent_of(observations.iter().filter(|o| tmax_hot(o)).count(), n_tmax);
    let tn90p = percent_of(observations.iter().filter(|o| tmin_hot(o)).count(), n_tmin);
    let p95_days = count_if(observations, n_tmax, tmax, |t| {
        baselines.tmax_scalar().is_some_and(|s| t > s)
    });

    // Growing degree days.
    let mut gdd_sum = 0.0;
    let mut gdd_missing_days = 0u32;
    for o in observations {
        match (o.temp_max, o.temp_min) {
            (Some(hi), Some(lo)) => gdd_sum += ((hi + lo) / 2.0 - config.gdd_base()).max(0.0),
            _ => gdd_missing_days += 1,
        }
    }
    let gdd = (gdd_missing_days as usize != observations.len()).then_some(gdd_sum);

    // Hot season.
    let hot_days: Vec<u16> = observations
        .iter()
        .filter(|o| o.temp_max.is_some_and(|t| t >= config.hot_day()))
        .map(|o| o.day_of_year)
        .collect();
    let first_hot_day = hot_days.first().copied();
    let last_hot_day = hot_days.last().copied();
    let hot_season_length = match (first_hot_day, last_hot_day) {
        (Some(first), Some(last)) => last - first,
        _ => 0,
    };

    AnnualMetricRow {
        year,
        decade: decade(year),
        n_days: observations.len(),
        su25,
        su30,
        tr20,
        dtr_mean,
        temp_max_mean,
        temp_min_mean,
        temp_mean_annual,
        precip_total,
        precip_days,
        r10mm,
        r20mm,
        sdii,
        rx1day,
        wsdi_days,
        tx90p,
        tn90p,
        cdd,
        cwd,
        gdd,
        gdd_missing_days,
        p95_days,
        first_hot_day,
        last_hot_day,
        hot_season_length,
        anomaly: None,
    }
}

fn count_present(observations: &[DailyObservation], variable: Variable) -> usize {
    observations
        .iter()
        .filter(|o| o.value(variable).is_some())
        .count()
}

/// Days whose value satisfies `pred`, or `None` when no day has a value.
fn count_if(
    observations: &[DailyObservation],
    n_valid: usize,
    value: impl Fn(&DailyObservation) -> Option<f64>,
    pred: impl Fn(f64) -> bool,
) -> Option<u32> {
    if n_valid == 0 {
        return None;
    }
    let n = observations
        .iter()
        .filter_map(value)
        .filter(|&v| pred(v))
        .count();
    Some(n as u32)
}

fn percent_of(count: usize, n_valid: usize) -> Option<f64> {
    (n_valid > 0).then(|| 100.0 * count as f64 / n_valid as f64)
}

/// One flag per calendar day from the first to the last observation.
///
/// Missing readings and dates absent from the record become `false`, so they
/// break any run.
pub(crate) fn daily_flags(
    observations: &[DailyObservation],
    flag: impl Fn(&DailyObservation) -> Option<bool>,
) -> Vec<bool> {
    let mut flags = Vec::with_capacity(observations.len());
    let mut prev: Option<NaiveDate> = None;
    for o in observations {
        if let Some(prev) = prev {
            let gap = (o.date - prev).num_days() - 1;
            flags.extend(std::iter::repeat_n(false, gap.max(0) as usize));
        }
        flags.push(flag(o).unwrap_or(false));
        prev = Some(o.date);
    }
    flags
}
