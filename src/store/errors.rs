//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No record with the given id
    #[error("Record not found: {0}")]
    RecordNotFound(u64),

    /// No record holds the given order value
    #[error("No record at order {0}")]
    OrderNotFound(u32),

    /// The store lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StoreError::RecordNotFound(7).to_string(),
            "Record not found: 7"
        );
        assert_eq!(StoreError::OrderNotFound(3).to_string(), "No record at order 3");
    }
}
