//! Thresholds used by the annual indices.

use crate::error::IndicesError;

/// Configuration for [`compute_year`](crate::compute_year) and
/// [`compute_monthly_rain`](crate::compute_monthly_rain).
///
/// Temperatures are in °C, precipitation in mm.
///
/// # Example
///
/// ```
/// use clima_indices::IndexConfig;
///
/// let config = IndexConfig::new()
///     .with_hot_day(35.0)
///     .with_wsdi_min_duration(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IndexConfig {
    summer_day: f64,
    hot_day: f64,
    tropical_night: f64,
    wet_day: f64,
    heavy_precip: f64,
    very_heavy_precip: f64,
    gdd_base: f64,
    wsdi_min_duration: usize,
}

impl IndexConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `summer_day = 25`, `hot_day = 30`, `tropical_night = 20`,
    /// `wet_day = 1.0`, `heavy_precip = 10`, `very_heavy_precip = 20`,
    /// `gdd_base = 10`, `wsdi_min_duration = 6`.
    pub fn new() -> Self {
        Self {
            summer_day: 25.0,
            hot_day: 30.0,
            tropical_night: 20.0,
            wet_day: 1.0,
            heavy_precip: 10.0,
            very_heavy_precip: 20.0,
            gdd_base: 10.0,
            wsdi_min_duration: 6,
        }
    }

    // --- Builder methods ---

    /// Sets the T_max threshold for summer days (SU25).
    pub fn with_summer_day(mut self, t: f64) -> Self {
        self.summer_day = t;
        self
    }

    /// Sets the T_max threshold for hot days (SU30 and the hot season).
    pub fn with_hot_day(mut self, t: f64) -> Self {
        self.hot_day = t;
        self
    }

    /// Sets the T_min threshold for tropical nights (TR20).
    pub fn with_tropical_night(mut self, t: f64) -> Self {
        self.tropical_night = t;
        self
    }

    /// Sets the precipitation at or above which a day is wet.
    pub fn with_wet_day(mut self, p: f64) -> Self {
        self.wet_day = p;
        self
    }

    /// Sets the heavy precipitation threshold (R10mm).
    pub fn with_heavy_precip(mut self, p: f64) -> Self {
        self.heavy_precip = p;
        self
    }

    /// Sets the very heavy precipitation threshold (R20mm).
    pub fn with_very_heavy_precip(mut self, p: f64) -> Self {
        self.very_heavy_precip = p;
        self
    }

    /// Sets the growing degree day base temperature.
    pub fn with_gdd_base(mut self, t: f64) -> Self {
        self.gdd_base = t;
        self
    }

    /// Sets the minimum warm-spell length in days.
    pub fn with_wsdi_min_duration(mut self, n: usize) -> Self {
        self.wsdi_min_duration = n;
        self
    }

    // --- Accessors ---

    /// Returns the summer day threshold.
    pub fn summer_day(&self) -> f64 {
        self.summer_day
    }

    /// Returns the hot day threshold.
    pub fn hot_day(&self) -> f64 {
        self.hot_day
    }

    /// Returns the tropical night threshold.
    pub fn tropical_night(&self) -> f64 {
        self.tropical_night
    }

    /// Returns the wet day threshold.
    pub fn wet_day(&self) -> f64 {
        self.wet_day
    }

    /// Returns the heavy precipitation threshold.
    pub fn heavy_precip(&self) -> f64 {
        self.heavy_precip
    }

    /// Returns the very heavy precipitation threshold.
    pub fn very_heavy_precip(&self) -> f64 {
        self.very_heavy_precip
    }

    /// Returns the growing degree day base temperature.
    pub fn gdd_base(&self) -> f64 {
        self.gdd_base
    }

    /// Returns the minimum warm-spell length.
    pub fn wsdi_min_duration(&self) -> usize {
        self.wsdi_min_duration
    }

    /// Validates this configuration.
    ///
    /// Checks that every threshold is finite, that the precipitation
    /// thresholds are non-negative and that `wsdi_min_duration >= 1`.
    pub fn validate(&self) -> Result<(), IndicesError> {
        let temps = [
            ("summer_day", self.summer_day),
            ("hot_day", self.hot_day),
            ("tropical_night", self.tropical_night),
            ("gdd_base", self.gdd_base),
        ];
        for (name, v) in temps {
            if !v.is_finite() {
                return Err(IndicesError::InvalidConfig {
                    reason: format!("{name} must be finite, got {v}"),
                });
            }
        }

        let precip = [
            ("wet_day", self.wet_day),
            ("heavy_precip", self.heavy_precip),
            ("very_heavy_precip", self.very_heavy_precip),
        ];
        for (name, v) in precip {
            if !v.is_finite() || v < 0.0 {
                return Err(IndicesError::InvalidConfig {
                    reason: format!("{name} must be finite and >= 0, got {v}"),
                });
            }
        }

        if self.wsdi_min_duration < 1 {
            return Err(IndicesError::InvalidConfig {
                reason: "wsdi_min_duration must be >= 1, got 0".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new()
    }
}
