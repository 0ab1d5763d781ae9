//! Error types for the clima-aggregate crate.

use clima_baseline::BaselineError;
use clima_indices::IndicesError;

/// Error type for all fallible operations in the clima-aggregate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregateError {
    /// Returned when an aggregation parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the baseline configuration is invalid.
    #[error("baseline: {0}")]
    Baseline(#[from] BaselineError),

    /// Returned when the index configuration is invalid.
    #[error("indices: {0}")]
    Indices(#[from] IndicesError),
}
