//! Error types for the clima-calendar crate.

/// Error type for all fallible operations in the clima-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range 1..=366.
    #[error("invalid day of year: {doy} (must be 1..=366)")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
    },

    /// Returned when a window radius would cover the calendar more than once.
    #[error("invalid window radius: {radius} (must be < {max})")]
    InvalidWindowRadius {
        /// The radius that was requested.
        radius: u16,
        /// Exclusive upper bound on the radius.
        max: u16,
    },
}
