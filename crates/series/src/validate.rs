//! Accumulated validation of the daily input contract.
//!
//! Provides [`ValidationCollector`] for gathering multiple violations into a
//! single [`SeriesError::Validation`], plus the checks applied by
//! [`DailySeries::new`](crate::DailySeries::new).

use chrono::Datelike;
use clima_calendar::Doy;

use crate::error::SeriesError;
use crate::observation::DailyObservation;
use crate::variable::Variable;

/// Messages beyond this count are summarised instead of listed.
const MAX_LISTED: usize = 20;

/// Accumulates validation errors and converts them into a single
/// [`SeriesError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(SeriesError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins the first messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), SeriesError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let count = self.errors.len();
        let mut details = self
            .errors
            .iter()
            .take(MAX_LISTED)
            .cloned()
            .collect::<Vec<_>>()
            .join("; ");
        if count > MAX_LISTED {
            details.push_str(&format!("; ... and {} more", count - MAX_LISTED));
        }
        Err(SeriesError::Validation { count, details })
    }
}

/// Check calendar fields and value ranges of every observation.
///
/// Dates must already be sorted; duplicates are reported once per repeated
/// date.
pub(crate) fn validate_observations(observations: &[DailyObservation]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for pair in observations.windows(2) {
        if pair[0].date == pair[1].date {
            c.push(format!("duplicate date {}", pair[1].date));
        }
    }

    for obs in observations {
        if Doy::new(obs.day_of_year).is_err() {
            c.push(format!(
                "day_of_year {} outside 1..=366 on {}",
                obs.day_of_year, obs.date
            ));
        } else if obs.day_of_year != Doy::from_date(obs.date).get() {
            c.push(format!(
                "day_of_year {} does not match date {}",
                obs.day_of_year, obs.date
            ));
        }
        if obs.year != obs.date.year() {
            c.push(format!("year {} does not match date {}", obs.year, obs.date));
        }
        for variable in Variable::ALL {
            if let Some(v) = obs.value(variable) {
                if !v.is_finite() {
                    c.push(format!("non-finite {variable} on {}: {v}", obs.date));
                }
            }
        }
        if let Some(p) = obs.precipitation {
            if p < 0.0 {
                c.push(format!("negative precipitation on {}: {p}", obs.date));
            }
        }
    }

    c
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(y: i32, m: u32, d: u32) -> DailyObservation {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        DailyObservation::new(date, Some(25.0), Some(15.0), Some(20.0), Some(0.0))
    }

    #[test]
    fn collector_empty_finishes_ok() {
        let c = ValidationCollector::new();
        assert!(c.is_empty());
        assert!(c.finish().is_ok());
    }

    #[test]
    fn collector_joins_messages() {
        let mut c = ValidationCollector::new();
        c.push("first");
        c.push("second");
        let err = c.finish().unwrap_err();
        assert_eq!(
            err,
            SeriesError::Validation {
                count: 2,
                details: "first; second".to_string()
            }
        );
    }

    #[test]
    fn collector_truncates_long_lists() {
        let mut c = ValidationCollector::new();
        for i in 0..25 {
            c.push(format!("e{i}"));
        }
        let SeriesError::Validation { count, details } = c.finish().unwrap_err();
        assert_eq!(count, 25);
        assert!(details.ends_with("; ... and 5 more"));
        assert!(!details.contains("e20"));
    }

    #[test]
    fn valid_observations_pass() {
        let series = vec![obs(2000, 1, 1), obs(2000, 1, 2)];
        assert!(validate_observations(&series).is_empty());
    }

    #[test]
    fn detects_duplicate_date() {
        let series = vec![obs(2000, 1, 1), obs(2000, 1, 1)];
        let err = validate_observations(&series).finish().unwrap_err();
        assert!(err.to_string().contains("duplicate date 2000-01-01"));
    }

    #[test]
    fn detects_doy_out_of_range() {
        let mut o = obs(2000, 1, 1);
        o.day_of_year = 367;
        let err = validate_observations(&[o]).finish().unwrap_err();
        assert!(err.to_string().contains("day_of_year 367 outside 1..=366"));
    }

    #[test]
    fn detects_doy_mismatch() {
        let mut o = obs(2001, 3, 1);
        o.day_of_year = 61;
        let err = validate_observations(&[o]).finish().unwrap_err();
        assert!(err.to_string().contains("does not match date 2001-03-01"));
    }

    #[test]
    fn detects_negative_and_non_finite_values() {
        let mut o = obs(2000, 1, 1);
        o.precipitation = Some(-0.5);
        o.temp_max = Some(f64::NAN);
        let err = validate_observations(&[o]).finish().unwrap_err();
        let SeriesError::Validation { count, details } = err;
        assert_eq!(count, 2);
        assert!(details.contains("negative precipitation"));
        assert!(details.contains("non-finite temp_max"));
    }
}
