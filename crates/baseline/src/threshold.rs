//! Immutable day-of-year threshold table.

use clima_calendar::{DAYS_IN_LEAP_YEAR, Doy};
use clima_series::Variable;

/// Percentile threshold of one variable for every calendar day.
///
/// A day whose pool was empty has no threshold; [`exceeds`](Self::exceeds)
/// treats such days as never exceeded.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarThreshold {
    variable: Variable,
    percentile: f64,
    values: Vec<Option<f64>>,
}

impl CalendarThreshold {
    /// Creates a table from 366 per-day values (index 0 is day 1).
    pub(crate) fn from_values(variable: Variable, percentile: f64, values: Vec<Option<f64>>) -> Self {
        debug_assert_eq!(values.len(), DAYS_IN_LEAP_YEAR as usize);
        Self {
            variable,
            percentile,
            values,
        }
    }

    /// Creates a table with the same threshold on every calendar day.
    pub fn uniform(variable: Variable, percentile: f64, value: Option<f64>) -> Self {
        Self::from_values(variable, percentile, vec![value; DAYS_IN_LEAP_YEAR as usize])
    }

    /// Returns the variable the table was built for.
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// Returns the percentile the table was built for.
    pub fn percentile(&self) -> f64 {
        self.percentile
    }

    /// Returns the threshold for `doy`, or `None` when undefined.
    pub fn get(&self, doy: Doy) -> Option<f64> {
        self.values[doy.index()]
    }

    /// Returns `true` when `value` is present and strictly above the
    /// threshold of `doy`.
    pub fn exceeds(&self, doy: Doy, value: Option<f64>) -> bool {
        matches!((value, self.get(doy)), (Some(v), Some(t)) if v > t)
    }

    /// Number of calendar days with a defined threshold.
    pub fn n_defined(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Iterates over `(day, threshold)` for days 1 through 366.
    pub fn iter(&self) -> impl Iterator<Item = (Doy, Option<f64>)> + '_ {
        Doy::all().zip(self.values.iter().copied())
    }
}
