//! Error types for the clima-indices crate.

use clima_baseline::BaselineError;

/// Error type for all fallible operations in the clima-indices crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IndicesError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a baseline threshold cannot be built.
    #[error("baseline: {0}")]
    Baseline(#[from] BaselineError),
}
