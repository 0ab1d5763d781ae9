//! Annual rows for every year of a series.

use clima_indices::{AnnualMetricRow, Baselines, IndexConfig, compute_year};
use clima_series::DailySeries;
use tracing::{debug, info};

/// Computes one [`AnnualMetricRow`] per distinct year of `series`, ascending
/// by year. Anomalies are left unset.
#[tracing::instrument(skip_all, fields(n_years = series.n_years()))]
pub fn compute_annual(
    series: &DailySeries,
    baselines: &Baselines,
    config: &IndexConfig,
) -> Vec<AnnualMetricRow> {
    let rows: Vec<AnnualMetricRow> = series
        .iter_years()
        .map(|(year, observations)| {
            let row = compute_year(year, observations, baselines, config);
            debug!(year, n_days = row.n_days, su30 = ?row.su30, "year computed");
            row
        })
        .collect();
    info!(n_rows = rows.len(), "annual indices computed");
    rows
}
