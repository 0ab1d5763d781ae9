//! # clima-aggregate
//!
//! Drives the index engine over a whole record and collects the results:
//!
//! 1. calendar baselines are built once from the reference period,
//! 2. every year is reduced to an [`AnnualMetricRow`],
//! 3. annual mean temperatures are turned into anomalies against a fixed
//!    reference window,
//! 4. rows are averaged per decade and selected metrics are tested for
//!    trends,
//! 5. headline facts are extracted for the [`ClimateSummary`].
//!
//! [`compute_report`] runs the whole pipeline and rounds the result once for
//! output. The individual steps are public so callers can assemble their own
//! flow.
//!
//! [`AnnualMetricRow`]: clima_indices::AnnualMetricRow

mod anomaly;
mod annual;
mod config;
mod decadal;
mod error;
mod metric;
mod report;
mod rounding;
mod summary;
mod trend_table;

pub use anomaly::{AnomalyWindow, apply_anomaly};
pub use annual::compute_annual;
pub use config::AggregateConfig;
pub use decadal::{DecadalMetricRow, decadal_means};
pub use error::AggregateError;
pub use metric::Metric;
pub use report::{ClimateReport, compute_report};
pub use summary::{ClimateSummary, DayExtreme, YearExtreme, summarize};
pub use trend_table::{DEFAULT_TREND_METRICS, TrendRow, trend_table};
