//! The full pipeline.

use clima_indices::{AnnualMetricRow, Baselines, MonthlyRainRow, compute_monthly_rain};
use clima_series::DailySeries;
use serde::Serialize;
use tracing::info;

use crate::annual::compute_annual;
use crate::anomaly::apply_anomaly;
use crate::config::AggregateConfig;
use crate::decadal::{DecadalMetricRow, decadal_means};
use crate::error::AggregateError;
use crate::rounding;
use crate::summary::{ClimateSummary, summarize};
use crate::trend_table::{TrendRow, trend_table};

/// Every table produced for one record, rounded for output.
#[derive(Debug, Clone, Serialize)]
pub struct ClimateReport {
    summary: ClimateSummary,
    annual: Vec<AnnualMetricRow>,
    decadal: Vec<DecadalMetricRow>,
    trends: Vec<TrendRow>,
    monthly_rain: Vec<MonthlyRainRow>,
}

impl ClimateReport {
    /// Returns the headline summary.
    pub fn summary(&self) -> &ClimateSummary {
        &self.summary
    }

    /// Returns one row per year, ascending.
    pub fn annual(&self) -> &[AnnualMetricRow] {
        &self.annual
    }

    /// Returns one row per decade, ascending.
    pub fn decadal(&self) -> &[DecadalMetricRow] {
        &self.decadal
    }

    /// Returns one row per tested metric, in configured order.
    pub fn trends(&self) -> &[TrendRow] {
        &self.trends
    }

    /// Returns one row per year and month with records.
    pub fn monthly_rain(&self) -> &[MonthlyRainRow] {
        &self.monthly_rain
    }
}

/// Runs the whole pipeline over `series`.
///
/// Statistics are computed from full-precision annual rows; the returned
/// tables are rounded once at the end (means and percentages to 2 places,
/// precipitation and degree days to 1, trend statistics to 4, decadal means
/// to 2).
///
/// # Errors
///
/// Returns an error if `config` fails validation. Sparse or empty input is
/// not an error: affected values are `None`.
#[tracing::instrument(skip_all, fields(n_days = series.len(), n_years = series.n_years()))]
pub fn compute_report(
    series: &DailySeries,
    config: &AggregateConfig,
) -> Result<ClimateReport, AggregateError> {
    config.validate()?;

    let baselines = Baselines::build(series, config.baseline(), config.hot_percentile())?;
    let mut annual = compute_annual(series, &baselines, config.indices());
    let reference = apply_anomaly(&mut annual, config.anomaly_window());
    let decadal = decadal_means(&annual);
    let mut trends = trend_table(&annual, config.trend_metrics());
    let mut monthly_rain: Vec<MonthlyRainRow> = series
        .iter_years()
        .flat_map(|(year, obs)| compute_monthly_rain(year, obs, config.indices()))
        .collect();
    let mut summary = summarize(series, &annual, &trends, reference);

    for t in &trends {
        info!(
            metric = %t.metric,
            direction = %t.direction,
            tau = ?t.tau,
            p = ?t.rank_p_value,
            slope_per_decade = ?t.slope_per_decade,
            "trend"
        );
    }

    annual.iter_mut().for_each(rounding::round_annual);
    trends.iter_mut().for_each(rounding::round_trend);
    monthly_rain.iter_mut().for_each(rounding::round_monthly);
    rounding::round_summary(&mut summary);

    info!(
        n_annual = annual.len(),
        n_decades = decadal.len(),
        n_trends = trends.len(),
        "report complete"
    );

    Ok(ClimateReport {
        summary,
        annual,
        decadal,
        trends,
        monthly_rain,
    })
}
