//! Error types surfaced by the core.

use thiserror::Error;

/// Errors produced while loading or replacing a [`Dataset`](crate::Dataset).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Requested an empty dataset or an inverted value range.
    #[error("invalid dataset range: n={n}, min={min}, max={max}")]
    InvalidRange { n: usize, min: i64, max: i64 },
    /// Replacement values were empty; bounds are undefined.
    #[error("dataset values must not be empty")]
    Empty,
}
