//! Error type for the allocation functions

use thiserror::Error;

/// Reasons an allocation request is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    /// A share was negative, NaN or infinite
    #[error("Share at row {index} must be a finite, non-negative percentage (got {value})")]
    InvalidShare { index: usize, value: f64 },

    /// A record did not carry a numeric share field
    #[error("Row {index} has no numeric '{key}' field")]
    MissingShare { index: usize, key: String },

    /// A dynamically supplied total was negative, fractional or not finite
    #[error("Total must be a finite, non-negative whole number (got {0})")]
    InvalidTotal(f64),

    /// The floors left a remainder outside `[0, rows]`, i.e. the shares do
    /// not sum to (roughly) 100
    #[error(
        "Shares are not normalized: {remainder} leftover units across {rows} rows; \
         normalize the shares before allocating"
    )]
    UnbalancedShares { remainder: i64, rows: usize },
}
