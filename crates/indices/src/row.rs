//! Output rows.

use serde::{Deserialize, Serialize};

/// Every annual index for one calendar year.
///
/// Counts and means are `None` when the underlying variable had no valid day
/// in the year. `anomaly` stays `None` until the aggregator fills it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualMetricRow {
    pub year: i32,
    pub decade: i32,
    pub n_days: usize,
    pub su25: Option<u32>,
    pub su30: Option<u32>,
    pub tr20: Option<u32>,
    pub dtr_mean: Option<f64>,
    pub temp_max_mean: Option<f64>,
    pub temp_min_mean: Option<f64>,
    pub temp_mean_annual: Option<f64>,
    pub precip_total: Option<f64>,
    pub precip_days: Option<u32>,
    pub r10mm: Option<u32>,
    pub r20mm: Option<u32>,
    pub sdii: Option<f64>,
    pub rx1day: Option<f64>,
    pub wsdi_days: Option<u32>,
    pub tx90p: Option<f64>,
    pub tn90p: Option<f64>,
    pub cdd: Option<u32>,
    pub cwd: Option<u32>,
    pub gdd: Option<f64>,
    pub gdd_missing_days: u32,
    pub p95_days: Option<u32>,
    pub first_hot_day: Option<u16>,
    pub last_hot_day: Option<u16>,
    pub hot_season_length: u16,
    pub anomaly: Option<f64>,
}

/// Precipitation summary of one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRainRow {
    pub year: i32,
    pub month: u8,
    pub precip_total: Option<f64>,
    pub r10mm: Option<u32>,
    pub wet_days: Option<u32>,
}
