//! Output rounding, applied once after every statistic is computed.

use clima_indices::{AnnualMetricRow, MonthlyRainRow};
use clima_stats::round_opt;

use crate::summary::{ClimateSummary, DayExtreme, YearExtreme};
use crate::trend_table::TrendRow;

/// Temperatures, means, percentages and anomalies.
const MEAN_DECIMALS: u32 = 2;
/// Precipitation amounts and degree days.
const AMOUNT_DECIMALS: u32 = 1;
/// Trend statistics.
const TREND_DECIMALS: u32 = 4;

pub(crate) fn round_annual(row: &mut AnnualMetricRow) {
    for v in [
        &mut row.dtr_mean,
        &mut row.temp_max_mean,
        &mut row.temp_min_mean,
        &mut row.temp_mean_annual,
        &mut row.sdii,
        &mut row.tx90p,
        &mut row.tn90p,
        &mut row.anomaly,
    ] {
        *v = round_opt(*v, MEAN_DECIMALS);
    }
    for v in [&mut row.precip_total, &mut row.rx1day, &mut row.gdd] {
        *v = round_opt(*v, AMOUNT_DECIMALS);
    }
}

pub(crate) fn round_monthly(row: &mut MonthlyRainRow) {
    row.precip_total = round_opt(row.precip_total, AMOUNT_DECIMALS);
}

pub(crate) fn round_trend(row: &mut TrendRow) {
    for v in [
        &mut row.tau,
        &mut row.rank_p_value,
        &mut row.slope,
        &mut row.intercept,
        &mut row.r_squared,
        &mut row.linear_p_value,
        &mut row.slope_per_decade,
    ] {
        *v = round_opt(*v, TREND_DECIMALS);
    }
}

pub(crate) fn round_summary(summary: &mut ClimateSummary) {
    let day = |d: Option<DayExtreme>| {
        d.map(|d| DayExtreme {
            value: clima_stats::round_to(d.value, AMOUNT_DECIMALS),
            ..d
        })
    };
    let year = |y: Option<YearExtreme>| {
        y.map(|y| YearExtreme {
            value: clima_stats::round_to(y.value, AMOUNT_DECIMALS),
            ..y
        })
    };
    summary.hottest_day = day(summary.hottest_day);
    summary.coldest_day = day(summary.coldest_day);
    summary.wettest_day = day(summary.wettest_day);
    summary.longest_warm_spell = year(summary.longest_warm_spell);
    summary.most_su30 = year(summary.most_su30);
    summary.su30_slope_per_decade = round_opt(summary.su30_slope_per_decade, MEAN_DECIMALS);
    summary.anomaly_reference_mean = round_opt(summary.anomaly_reference_mean, MEAN_DECIMALS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clima_trend::TrendDirection;

    use crate::metric::Metric;

    #[test]
    fn trend_rounds_to_four_places() {
        let mut row = TrendRow {
            metric: Metric::Su30,
            n: 10,
            tau: Some(0.123_456),
            rank_p_value: Some(0.000_049),
            direction: TrendDirection::Increasing,
            slope: Some(-1.234_56),
            intercept: None,
            r_squared: Some(0.5),
            linear_p_value: Some(0.999_99),
            slope_per_decade: Some(-12.345_6),
        };
        round_trend(&mut row);
        assert_eq!(row.tau, Some(0.1235));
        assert_eq!(row.rank_p_value, Some(0.0));
        assert_eq!(row.slope, Some(-1.2346));
        assert_eq!(row.intercept, None);
        assert_eq!(row.linear_p_value, Some(1.0));
        assert_eq!(row.slope_per_decade, Some(-12.3456));
    }

    #[test]
    fn monthly_rounds_precip_to_one_place() {
        let mut row = MonthlyRainRow {
            year: 2000,
            month: 5,
            precip_total: Some(12.34),
            r10mm: Some(1),
            wet_days: Some(3),
        };
        round_monthly(&mut row);
        assert_eq!(row.precip_total, Some(12.3));
    }
}
