//! Side-by-side rank and linear trends per metric.

use clima_indices::AnnualMetricRow;
use clima_trend::{TrendDirection, linear_trend, rank_trend};
use serde::{Deserialize, Serialize};

use crate::metric::Metric;

/// Metrics tested when no selection is configured.
pub const DEFAULT_TREND_METRICS: [Metric; 4] =
    [Metric::Su30, Metric::Tr20, Metric::DtrMean, Metric::WsdiDays];

/// Both trend estimates for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRow {
    pub metric: Metric,
    pub n: usize,
    pub tau: Option<f64>,
    pub rank_p_value: Option<f64>,
    pub direction: TrendDirection,
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
    pub r_squared: Option<f64>,
    pub linear_p_value: Option<f64>,
    pub slope_per_decade: Option<f64>,
}

/// Runs [`rank_trend`] and [`linear_trend`] over each metric's annual series.
///
/// `rows` must be ascending by year with one row per year.
pub fn trend_table(rows: &[AnnualMetricRow], metrics: &[Metric]) -> Vec<TrendRow> {
    debug_assert!(rows.windows(2).all(|w| w[0].year < w[1].year));
    let years: Vec<i32> = rows.iter().map(|r| r.year).collect();

    metrics
        .iter()
        .map(|&metric| {
            let values: Vec<Option<f64>> = rows.iter().map(|r| metric.value(r)).collect();
            let rank = rank_trend(&values);
            let linear = linear_trend(&years, &values);
            TrendRow {
                metric,
                n: rank.n(),
                tau: rank.coefficient(),
                rank_p_value: rank.p_value(),
                direction: rank.direction(),
                slope: linear.slope(),
                intercept: linear.intercept(),
                r_squared: linear.r_squared(),
                linear_p_value: linear.p_value(),
                slope_per_decade: linear.slope_per_decade(),
            }
        })
        .collect()
}
