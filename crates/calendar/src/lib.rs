//! # clima-calendar
//!
//! Gregorian day-of-year arithmetic used by the percentile baselines.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"Doy::from_date()"| B["Doy (1..=366)"]
//!     B -->|"circular_window()"| C["Vec of Doy"]
//!     D["year"] -->|"decade()"| E["decade start"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use clima_calendar::{Doy, circular_window, decade};
//!
//! let doy = Doy::new(1).unwrap();
//! let window = circular_window(doy, 2).unwrap();
//! let days: Vec<u16> = window.iter().map(|d| d.get()).collect();
//! assert_eq!(days, vec![1, 2, 3, 365, 366]);
//!
//! assert_eq!(decade(1987), 1980);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype |
//! | `window` | Circular calendar windows wrapping across 366/1 |
//! | `decade` | Decade bucketing |
//! | `error` | Error types |

mod decade;
mod doy;
mod error;
mod window;

pub use decade::decade;
pub use doy::{DAYS_IN_LEAP_YEAR, Doy};
pub use error::CalendarError;
pub use window::{MAX_WINDOW_RADIUS, circular_window};
