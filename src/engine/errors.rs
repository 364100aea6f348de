//! Reorder engine error types

use thiserror::Error;

use crate::store::StoreError;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Reorder engine errors
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// An order value fell outside `[1, N]`
    #[error("Order value {value} outside valid range 1..={max}")]
    OrderOutOfRange { value: u32, max: usize },

    /// A bulk move was requested with no selected records
    #[error("Bulk move requires at least one selected record")]
    EmptySelection,

    /// A selected id does not name a stored record
    #[error("Unknown record id: {0}")]
    UnknownRecord(u64),

    /// Underlying store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EngineError {
    /// Build an out-of-range error for order `value` against a set of `max` records
    pub fn out_of_range(value: u32, max: usize) -> Self {
        Self::OrderOutOfRange { value, max }
    }
}
