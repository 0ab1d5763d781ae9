//! Day-of-year newtype for the Gregorian calendar.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Number of calendar slots tracked per year (leap years included).
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Day-of-year in the Gregorian calendar (1..=366).
///
/// Day 366 only occurs in leap years; in other years December 31 is day 365.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

impl Doy {
    /// Creates a new `Doy` from a day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=366.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=DAYS_IN_LEAP_YEAR).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Returns the ordinal day of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        // chrono guarantees ordinal() in 1..=366
        Self(date.ordinal() as u16)
    }

    /// Returns the inner day-of-year value (1..=366).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index suitable for array indexing (0..=365).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterates over every day-of-year slot, 1 through 366.
    pub fn all() -> impl Iterator<Item = Doy> {
        (1..=DAYS_IN_LEAP_YEAR).map(Doy)
    }
}

impl std::fmt::Display for Doy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
