//! # clima-series
//!
//! The input contract of the climate-index engine: one
//! [`DailyObservation`] per calendar day, validated and grouped by year in a
//! [`DailySeries`]. Missing readings are `None`, never NaN.

mod error;
mod observation;
mod series;
mod validate;
mod variable;

pub use error::SeriesError;
pub use observation::DailyObservation;
pub use series::DailySeries;
pub use variable::Variable;
