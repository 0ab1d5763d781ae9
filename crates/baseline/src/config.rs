//! Configuration for calendar-day threshold estimation.

use clima_calendar::MAX_WINDOW_RADIUS;

use crate::error::BaselineError;

/// Configuration for [`build_calendar_threshold`](crate::build_calendar_threshold).
///
/// # Example
///
/// ```
/// use clima_baseline::BaselineConfig;
///
/// let config = BaselineConfig::new()
///     .with_year_range(1971, 2000)
///     .with_percentile(95.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BaselineConfig {
    start_year: i32,
    end_year: i32,
    percentile: f64,
    window_radius: u16,
    min_pool: usize,
}

impl BaselineConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `year_range = 1961..=1990`, `percentile = 90.0`,
    /// `window_radius = 2`, `min_pool = 10`.
    pub fn new() -> Self {
        Self {
            start_year: 1961,
            end_year: 1990,
            percentile: 90.0,
            window_radius: 2,
            min_pool: 10,
        }
    }

    /// Sets the inclusive baseline year range.
    pub fn with_year_range(mut self, start: i32, end: i32) -> Self {
        self.start_year = start;
        self.end_year = end;
        self
    }

    /// Sets the percentile (0..=100).
    pub fn with_percentile(mut self, p: f64) -> Self {
        self.percentile = p;
        self
    }

    /// Sets the half-width of the circular pooling window in days.
    pub fn with_window_radius(mut self, r: u16) -> Self {
        self.window_radius = r;
        self
    }

    /// Sets the smallest windowed pool used before falling back to the exact day.
    pub fn with_min_pool(mut self, n: usize) -> Self {
        self.min_pool = n;
        self
    }

    /// Returns the first baseline year.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the last baseline year (inclusive).
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Returns the percentile.
    pub fn percentile(&self) -> f64 {
        self.percentile
    }

    /// Returns the pooling window radius.
    pub fn window_radius(&self) -> u16 {
        self.window_radius
    }

    /// Returns the minimum windowed pool size.
    pub fn min_pool(&self) -> usize {
        self.min_pool
    }

    /// Validates this configuration.
    ///
    /// Checks that `percentile` is finite and within `[0, 100]`, that
    /// `start_year <= end_year`, that `window_radius < 183` and that
    /// `min_pool >= 1`.
    pub fn validate(&self) -> Result<(), BaselineError> {
        if !self.percentile.is_finite() || !(0.0..=100.0).contains(&self.percentile) {
            return Err(BaselineError::InvalidConfig {
                reason: format!("percentile must be in [0, 100], got {}", self.percentile),
            });
        }
        if self.start_year > self.end_year {
            return Err(BaselineError::InvalidConfig {
                reason: format!(
                    "start year {} is after end year {}",
                    self.start_year, self.end_year
                ),
            });
        }
        if self.window_radius >= MAX_WINDOW_RADIUS {
            return Err(BaselineError::InvalidConfig {
                reason: format!(
                    "window_radius must be < {MAX_WINDOW_RADIUS}, got {}",
                    self.window_radius
                ),
            });
        }
        if self.min_pool < 1 {
            return Err(BaselineError::InvalidConfig {
                reason: "min_pool must be >= 1, got 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self::new()
    }
}
