//! Error types for clima-series.

/// Error type for all fallible operations in the clima-series crate.
///
/// Every variant indicates that the upstream cleaning step broke the input
/// contract; the whole computation is rejected rather than partially
/// recovered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}
