//! # clima-indices
//!
//! Per-year climate extreme indices in the ETCCDI tradition: threshold
//! counts (summer days, tropical nights), spell lengths (warm spells, dry
//! and wet spells), percentile exceedances against calendar-day baselines,
//! growing degree days and a monthly precipitation breakdown.
//!
//! Every computation is a pure function of one year's observations and an
//! immutable [`Baselines`] bundle, so years can be computed in any order.
//! Missing readings are excluded from both numerator and denominator; an
//! index whose variable has no valid day in the year is `None`.
//!
//! ```text
//!   DailySeries ──► Baselines::build ──┐
//!        │                              ▼
//!        └──── year slice ──► compute_year ──► AnnualMetricRow
//! ```

mod annual;
mod baselines;
mod config;
mod error;
mod monthly;
mod row;

pub use annual::compute_year;
pub use baselines::Baselines;
pub use config::IndexConfig;
pub use error::IndicesError;
pub use monthly::compute_monthly_rain;
pub use row::{AnnualMetricRow, MonthlyRainRow};
