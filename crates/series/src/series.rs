//! Validated daily series grouped by year.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::error::SeriesError;
use crate::observation::DailyObservation;
use crate::validate;
use crate::variable::Variable;

/// Daily observations sorted by date, with O(log n) per-year lookup.
#[derive(Debug, Clone, Default)]
pub struct DailySeries {
    observations: Vec<DailyObservation>,
    years: BTreeMap<i32, Range<usize>>,
}

impl DailySeries {
    /// Creates a series after sorting by date and validating the input
    /// contract.
    ///
    /// An empty series is valid and simply has no years.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Validation`] listing every violation if:
    /// - two observations share a date
    /// - a `day_of_year` is outside 1..=366 or disagrees with its date
    /// - a `year` disagrees with its date
    /// - a value is non-finite, or precipitation is negative
    pub fn new(mut observations: Vec<DailyObservation>) -> Result<Self, SeriesError> {
        observations.sort_by_key(|o| o.date);
        validate::validate_observations(&observations).finish()?;

        let mut years: BTreeMap<i32, Range<usize>> = BTreeMap::new();
        for (i, obs) in observations.iter().enumerate() {
            years
                .entry(obs.year)
                .and_modify(|r| r.end = i + 1)
                .or_insert(i..i + 1);
        }

        Ok(Self {
            observations,
            years,
        })
    }

    /// Returns all observations in date order.
    pub fn observations(&self) -> &[DailyObservation] {
        &self.observations
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns `true` if the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Returns the distinct years present, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Returns the number of distinct years.
    pub fn n_years(&self) -> usize {
        self.years.len()
    }

    /// Returns the observations of `year`, or `None` if the year is absent.
    pub fn year(&self, year: i32) -> Option<&[DailyObservation]> {
        self.years
            .get(&year)
            .map(|r| &self.observations[r.clone()])
    }

    /// Iterates over `(year, observations)` pairs in ascending year order.
    pub fn iter_years(&self) -> impl Iterator<Item = (i32, &[DailyObservation])> + '_ {
        self.years
            .iter()
            .map(|(&y, r)| (y, &self.observations[r.clone()]))
    }

    /// Observations whose year lies in `start..=end`.
    pub fn year_span(&self, start: i32, end: i32) -> &[DailyObservation] {
        if start > end {
            return &[];
        }
        let mut in_span = self.years.range(start..=end).map(|(_, r)| r.clone());
        match in_span.next() {
            Some(first) => {
                let last = in_span.last().unwrap_or_else(|| first.clone());
                &self.observations[first.start..last.end]
            }
            None => &[],
        }
    }

    /// Present values of `variable` across the whole series.
    pub fn values(&self, variable: Variable) -> impl Iterator<Item = f64> + '_ {
        self.observations.iter().filter_map(move |o| o.value(variable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn obs(y: i32, m: u32, d: u32, tmax: Option<f64>) -> DailyObservation {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        DailyObservation::new(date, tmax, Some(10.0), Some(15.0), Some(0.0))
    }

    #[test]
    fn sorts_and_groups_by_year() {
        let series = DailySeries::new(vec![
            obs(2001, 1, 1, Some(3.0)),
            obs(2000, 12, 31, Some(2.0)),
            obs(2000, 1, 1, Some(1.0)),
        ])
        .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.years().collect::<Vec<_>>(), vec![2000, 2001]);
        assert_eq!(series.year(2000).unwrap().len(), 2);
        assert_eq!(series.year(2001).unwrap()[0].temp_max, Some(3.0));
        assert!(series.year(1999).is_none());
    }

    #[test]
    fn empty_series_is_valid() {
        let series = DailySeries::new(Vec::new()).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.n_years(), 0);
        assert!(series.year_span(1961, 1990).is_empty());
    }

    #[test]
    fn rejects_duplicates() {
        let result = DailySeries::new(vec![obs(2000, 1, 1, None), obs(2000, 1, 1, None)]);
        assert!(matches!(result, Err(SeriesError::Validation { count: 1, .. })));
    }

    #[test]
    fn year_span_is_inclusive() {
        let series = DailySeries::new(vec![
            obs(1960, 6, 1, None),
            obs(1961, 6, 1, None),
            obs(1975, 6, 1, None),
            obs(1990, 6, 1, None),
            obs(1991, 6, 1, None),
        ])
        .unwrap();
        let span = series.year_span(1961, 1990);
        let years: Vec<i32> = span.iter().map(|o| o.year).collect();
        assert_eq!(years, vec![1961, 1975, 1990]);
    }

    #[test]
    fn year_span_outside_data_is_empty() {
        let series = DailySeries::new(vec![obs(2000, 1, 1, None)]).unwrap();
        assert!(series.year_span(1961, 1990).is_empty());
        assert!(series.year_span(2001, 2000).is_empty());
    }

    #[test]
    fn values_skip_missing() {
        let series = DailySeries::new(vec![
            obs(2000, 1, 1, Some(1.0)),
            obs(2000, 1, 2, None),
            obs(2000, 1, 3, Some(3.0)),
        ])
        .unwrap();
        let v: Vec<f64> = series.values(Variable::TempMax).collect();
        assert_eq!(v, vec![1.0, 3.0]);
    }
}
