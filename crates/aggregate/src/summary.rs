//! Headline facts about the whole record.

use chrono::NaiveDate;
use clima_indices::AnnualMetricRow;
use clima_series::{DailySeries, Variable};
use clima_trend::linear_trend;
use serde::{Deserialize, Serialize};

use crate::metric::Metric;
use crate::trend_table::TrendRow;

/// A single day's extreme reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayExtreme {
    pub date: NaiveDate,
    pub value: f64,
}

/// The year holding an annual extreme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearExtreme {
    pub year: i32,
    pub value: f64,
}

/// Headline statistics of a record.
///
/// Ties resolve to the earliest date or year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateSummary {
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub n_years: usize,
    /// Highest daily T_max.
    pub hottest_day: Option<DayExtreme>,
    /// Lowest daily T_min.
    pub coldest_day: Option<DayExtreme>,
    /// Highest daily precipitation.
    pub wettest_day: Option<DayExtreme>,
    /// Year with the most warm-spell days.
    pub longest_warm_spell: Option<YearExtreme>,
    /// Year with the most SU30 days.
    pub most_su30: Option<YearExtreme>,
    pub su30_slope_per_decade: Option<f64>,
    pub anomaly_reference_mean: Option<f64>,
}

/// Extracts the headline facts from a series and its annual rows.
///
/// The SU30 slope is taken from `trends` when SU30 was tested, otherwise it
/// is fitted here.
pub fn summarize(
    series: &DailySeries,
    rows: &[AnnualMetricRow],
    trends: &[TrendRow],
    reference_mean: Option<f64>,
) -> ClimateSummary {
    let su30_slope_per_decade = match trends.iter().find(|t| t.metric == Metric::Su30) {
        Some(t) => t.slope_per_decade,
        None => {
            let years: Vec<i32> = rows.iter().map(|r| r.year).collect();
            let values: Vec<Option<f64>> = rows.iter().map(|r| Metric::Su30.value(r)).collect();
            linear_trend(&years, &values).slope_per_decade()
        }
    };

    ClimateSummary {
        first_year: series.years().next(),
        last_year: series.years().last(),
        n_years: series.n_years(),
        hottest_day: day_extreme(series, Variable::TempMax, |v, best| v > best),
        coldest_day: day_extreme(series, Variable::TempMin, |v, best| v < best),
        wettest_day: day_extreme(series, Variable::Precipitation, |v, best| v > best),
        longest_warm_spell: year_max(rows, Metric::WsdiDays),
        most_su30: year_max(rows, Metric::Su30),
        su30_slope_per_decade,
        anomaly_reference_mean: reference_mean,
    }
}

fn day_extreme(
    series: &DailySeries,
    variable: Variable,
    better: impl Fn(f64, f64) -> bool,
) -> Option<DayExtreme> {
    let mut best: Option<DayExtreme> = None;
    for obs in series.observations() {
        if let Some(v) = obs.value(variable) {
            if best.is_none_or(|b| better(v, b.value)) {
                best = Some(DayExtreme {
                    date: obs.date,
                    value: v,
                });
            }
        }
    }
    best
}

fn year_max(rows: &[AnnualMetricRow], metric: Metric) -> Option<YearExtreme> {
    let mut best: Option<YearExtreme> = None;
    for row in rows {
        if let Some(v) = metric.value(row) {
            if best.is_none_or(|b| v > b.value) {
                best = Some(YearExtreme {
                    year: row.year,
                    value: v,
                });
            }
        }
    }
    best
}
