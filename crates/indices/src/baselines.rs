//! The immutable baseline bundle shared by every year.

use clima_baseline::{BaselineConfig, CalendarThreshold, build_calendar_threshold, scalar_percentile};
use clima_series::{DailySeries, Variable};
use tracing::info;

use crate::error::IndicesError;

/// Thresholds computed once over the whole dataset and passed explicitly to
/// [`compute_year`](crate::compute_year).
#[derive(Debug, Clone)]
pub struct Baselines {
    tmax: CalendarThreshold,
    tmin: CalendarThreshold,
    tmax_scalar: Option<f64>,
}

impl Baselines {
    /// Assembles a bundle from precomputed parts.
    ///
    /// `tmax_scalar` is the full-record T_max percentile used for
    /// `p95_days`; `None` means no day can exceed it.
    pub fn new(tmax: CalendarThreshold, tmin: CalendarThreshold, tmax_scalar: Option<f64>) -> Self {
        Self {
            tmax,
            tmin,
            tmax_scalar,
        }
    }

    /// Builds the calendar thresholds of T_max and T_min with `config` and
    /// the scalar T_max percentile (`scalar_pct`, 0..=100) over the full
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`IndicesError::Baseline`] if `config` is invalid, and
    /// [`IndicesError::InvalidConfig`] if `scalar_pct` is outside `[0, 100]`.
    pub fn build(
        series: &DailySeries,
        config: &BaselineConfig,
        scalar_pct: f64,
    ) -> Result<Self, IndicesError> {
        if !scalar_pct.is_finite() || !(0.0..=100.0).contains(&scalar_pct) {
            return Err(IndicesError::InvalidConfig {
                reason: format!("scalar percentile must be in [0, 100], got {scalar_pct}"),
            });
        }
        let tmax = build_calendar_threshold(series, Variable::TempMax, config)?;
        let tmin = build_calendar_threshold(series, Variable::TempMin, config)?;
        let tmax_scalar = scalar_percentile(series, Variable::TempMax, scalar_pct);
        info!(?tmax_scalar, scalar_pct, "baselines ready");
        Ok(Self::new(tmax, tmin, tmax_scalar))
    }

    /// Returns the T_max calendar threshold.
    pub fn tmax(&self) -> &CalendarThreshold {
        &self.tmax
    }

    /// Returns the T_min calendar threshold.
    pub fn tmin(&self) -> &CalendarThreshold {
        &self.tmin
    }

    /// Returns the full-record T_max scalar threshold.
    pub fn tmax_scalar(&self) -> Option<f64> {
        self.tmax_scalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clima_series::DailyObservation;

    #[test]
    fn build_rejects_bad_scalar_percentile() {
        let series = DailySeries::default();
        let err = Baselines::build(&series, &BaselineConfig::default(), 120.0).unwrap_err();
        assert!(matches!(err, IndicesError::InvalidConfig { .. }));
    }

    #[test]
    fn build_propagates_baseline_errors() {
        let series = DailySeries::default();
        let config = BaselineConfig::new().with_year_range(2000, 1990);
        let err = Baselines::build(&series, &config, 95.0).unwrap_err();
        assert!(matches!(err, IndicesError::Baseline(_)));
    }

    #[test]
    fn build_uses_full_record_for_scalar() {
        let obs = [(1970, 10.0), (2010, 20.0)]
            .iter()
            .map(|&(y, t)| {
                let date = NaiveDate::from_ymd_opt(y, 6, 1).unwrap();
                DailyObservation::new(date, Some(t), Some(t - 8.0), Some(t - 4.0), None)
            })
            .collect();
        let series = DailySeries::new(obs).unwrap();
        let b = Baselines::build(&series, &BaselineConfig::default(), 50.0).unwrap();
        assert_eq!(b.tmax_scalar(), Some(15.0));
        assert_eq!(b.tmax().n_defined(), 1);
        assert_eq!(b.tmin().variable(), Variable::TempMin);
    }
}
