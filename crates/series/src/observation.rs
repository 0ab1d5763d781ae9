//! A single day of observations.

use chrono::{Datelike, NaiveDate};
use clima_calendar::Doy;

use crate::variable::Variable;

/// One calendar day of cleaned observations.
///
/// `year` and `day_of_year` are carried explicitly because upstream tables
/// store them as columns; [`DailySeries::new`](crate::DailySeries::new)
/// checks that they agree with `date`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyObservation {
    /// Calendar date.
    pub date: NaiveDate,
    /// Calendar year.
    pub year: i32,
    /// Day of year (1..=366).
    pub day_of_year: u16,
    /// Daily maximum temperature (°C).
    pub temp_max: Option<f64>,
    /// Daily minimum temperature (°C).
    pub temp_min: Option<f64>,
    /// Daily mean temperature (°C).
    pub temp_mean: Option<f64>,
    /// Daily precipitation (mm).
    pub precipitation: Option<f64>,
}

impl DailyObservation {
    /// Creates an observation, deriving `year` and `day_of_year` from `date`.
    pub fn new(
        date: NaiveDate,
        temp_max: Option<f64>,
        temp_min: Option<f64>,
        temp_mean: Option<f64>,
        precipitation: Option<f64>,
    ) -> Self {
        Self {
            date,
            year: date.year(),
            day_of_year: Doy::from_date(date).get(),
            temp_max,
            temp_min,
            temp_mean,
            precipitation,
        }
    }

    /// Returns the value of `variable`, or `None` if it was not observed.
    pub fn value(&self, variable: Variable) -> Option<f64> {
        match variable {
            Variable::TempMax => self.temp_max,
            Variable::TempMin => self.temp_min,
            Variable::TempMean => self.temp_mean,
            Variable::Precipitation => self.precipitation,
        }
    }

    /// Calendar month (1..=12).
    pub fn month(&self) -> u8 {
        self.date.month() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_calendar_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let obs = DailyObservation::new(date, Some(30.0), Some(20.0), Some(25.0), Some(0.0));
        assert_eq!(obs.year, 2024);
        assert_eq!(obs.day_of_year, 366);
        assert_eq!(obs.month(), 12);
    }

    #[test]
    fn value_selects_variable() {
        let date = NaiveDate::from_ymd_opt(2000, 6, 1).unwrap();
        let obs = DailyObservation::new(date, Some(31.0), None, Some(24.0), Some(2.5));
        assert_eq!(obs.value(Variable::TempMax), Some(31.0));
        assert_eq!(obs.value(Variable::TempMin), None);
        assert_eq!(obs.value(Variable::TempMean), Some(24.0));
        assert_eq!(obs.value(Variable::Precipitation), Some(2.5));
    }
}
