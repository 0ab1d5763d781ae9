//! # clima-baseline
//!
//! Day-of-year percentile thresholds estimated from a fixed reference
//! period (1961–1990 by default).
//!
//! For every calendar day the values of one variable are pooled from the
//! baseline years over a circular ±2 day window. When the pool is too small
//! the exact day is used instead, and a day with no data at all is left
//! undefined. The resulting [`CalendarThreshold`] is immutable and is shared
//! by every per-year index computation.
//!
//! ```
//! use chrono::NaiveDate;
//! use clima_baseline::{BaselineConfig, build_calendar_threshold};
//! use clima_calendar::Doy;
//! use clima_series::{DailyObservation, DailySeries, Variable};
//!
//! let obs = (1961..=1990)
//!     .map(|y| {
//!         let date = NaiveDate::from_ymd_opt(y, 7, 1).unwrap();
//!         DailyObservation::new(date, Some(30.0), Some(18.0), Some(24.0), Some(0.0))
//!     })
//!     .collect();
//! let series = DailySeries::new(obs).unwrap();
//!
//! let threshold =
//!     build_calendar_threshold(&series, Variable::TempMax, &BaselineConfig::default()).unwrap();
//! let july_1 = Doy::new(182).unwrap();
//! assert_eq!(threshold.get(july_1), Some(30.0));
//! assert!(threshold.get(Doy::new(1).unwrap()).is_none());
//! ```

mod build;
mod config;
mod error;
mod threshold;

pub use build::{build_calendar_threshold, scalar_percentile};
pub use config::BaselineConfig;
pub use error::BaselineError;
pub use threshold::CalendarThreshold;
