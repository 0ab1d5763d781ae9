//! Error types for the clima-baseline crate.

use clima_calendar::CalendarError;

/// Error type for all fallible operations in the clima-baseline crate.
///
/// Only invalid configuration is an error; sparse or empty baseline data
/// produces undefined thresholds instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BaselineError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the pooling window cannot be built.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
