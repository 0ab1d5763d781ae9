//! Configuration of the full aggregation pipeline.

use clima_baseline::BaselineConfig;
use clima_indices::IndexConfig;

use crate::anomaly::AnomalyWindow;
use crate::error::AggregateError;
use crate::metric::Metric;
use crate::trend_table::DEFAULT_TREND_METRICS;

/// Configuration for [`compute_report`](crate::compute_report).
///
/// # Example
///
/// ```
/// use clima_aggregate::{AggregateConfig, AnomalyWindow, Metric};
///
/// let config = AggregateConfig::new()
///     .with_anomaly_window(AnomalyWindow::between(1951, 1980))
///     .with_trend_metrics(vec![Metric::Su30, Metric::Cdd]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateConfig {
    baseline: BaselineConfig,
    indices: IndexConfig,
    hot_percentile: f64,
    anomaly_window: AnomalyWindow,
    trend_metrics: Vec<Metric>,
}

impl AggregateConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: default [`BaselineConfig`] and [`IndexConfig`],
    /// `hot_percentile = 95.0`, anomaly window up to 1980, trend metrics
    /// `su30, tr20, dtr_mean, wsdi_days`.
    pub fn new() -> Self {
        Self {
            baseline: BaselineConfig::default(),
            indices: IndexConfig::default(),
            hot_percentile: 95.0,
            anomaly_window: AnomalyWindow::default(),
            trend_metrics: DEFAULT_TREND_METRICS.to_vec(),
        }
    }

    /// Sets the calendar baseline configuration.
    pub fn with_baseline(mut self, c: BaselineConfig) -> Self {
        self.baseline = c;
        self
    }

    /// Sets the annual index configuration.
    pub fn with_indices(mut self, c: IndexConfig) -> Self {
        self.indices = c;
        self
    }

    /// Sets the full-record T_max percentile used for `p95_days`.
    pub fn with_hot_percentile(mut self, p: f64) -> Self {
        self.hot_percentile = p;
        self
    }

    /// Sets the anomaly reference window.
    pub fn with_anomaly_window(mut self, w: AnomalyWindow) -> Self {
        self.anomaly_window = w;
        self
    }

    /// Sets the metrics tested for trends.
    pub fn with_trend_metrics(mut self, metrics: Vec<Metric>) -> Self {
        self.trend_metrics = metrics;
        self
    }

    /// Returns the calendar baseline configuration.
    pub fn baseline(&self) -> &BaselineConfig {
        &self.baseline
    }

    /// Returns the annual index configuration.
    pub fn indices(&self) -> &IndexConfig {
        &self.indices
    }

    /// Returns the full-record T_max percentile.
    pub fn hot_percentile(&self) -> f64 {
        self.hot_percentile
    }

    /// Returns the anomaly reference window.
    pub fn anomaly_window(&self) -> &AnomalyWindow {
        &self.anomaly_window
    }

    /// Returns the metrics tested for trends.
    pub fn trend_metrics(&self) -> &[Metric] {
        &self.trend_metrics
    }

    /// Validates this configuration and the nested ones.
    ///
    /// Also checks that `hot_percentile` lies in `[0, 100]`, that the
    /// anomaly window is not reversed and that trend metrics are not
    /// repeated.
    pub fn validate(&self) -> Result<(), AggregateError> {
        self.baseline.validate()?;
        self.indices.validate()?;

        if !self.hot_percentile.is_finite() || !(0.0..=100.0).contains(&self.hot_percentile) {
            return Err(AggregateError::InvalidConfig {
                reason: format!(
                    "hot_percentile must be in [0, 100], got {}",
                    self.hot_percentile
                ),
            });
        }

        if let Some(start) = self.anomaly_window.start() {
            if start > self.anomaly_window.end() {
                return Err(AggregateError::InvalidConfig {
                    reason: format!(
                        "anomaly window start {start} is after end {}",
                        self.anomaly_window.end()
                    ),
                });
            }
        }

        for (i, m) in self.trend_metrics.iter().enumerate() {
            if self.trend_metrics[..i].contains(m) {
                return Err(AggregateError::InvalidConfig {
                    reason: format!("trend metric {m} listed more than once"),
                });
            }
        }

        Ok(())
    }
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let c = AggregateConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.hot_percentile(), 95.0);
        assert_eq!(c.anomaly_window().end(), 1980);
        assert_eq!(
            c.trend_metrics(),
            &[Metric::Su30, Metric::Tr20, Metric::DtrMean, Metric::WsdiDays]
        );
    }

    #[test]
    fn nested_errors_propagate() {
        let c = AggregateConfig::new().with_baseline(BaselineConfig::new().with_min_pool(0));
        assert!(matches!(c.validate(), Err(AggregateError::Baseline(_))));

        let c = AggregateConfig::new().with_indices(IndexConfig::new().with_wsdi_min_duration(0));
        assert!(matches!(c.validate(), Err(AggregateError::Indices(_))));
    }

    #[test]
    fn rejects_reversed_anomaly_window() {
        let c = AggregateConfig::new().with_anomaly_window(AnomalyWindow::between(1990, 1980));
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("anomaly window start 1990 is after end 1980"));
    }

    #[test]
    fn rejects_duplicate_trend_metric() {
        let c = AggregateConfig::new().with_trend_metrics(vec![Metric::Su30, Metric::Su30]);
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("su30 listed more than once"));
    }

    #[test]
    fn rejects_bad_hot_percentile() {
        let c = AggregateConfig::new().with_hot_percentile(-5.0);
        assert!(matches!(c.validate(), Err(AggregateError::InvalidConfig { .. })));
    }
}
