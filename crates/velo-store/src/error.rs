//! Error types for the storage layer.

use thiserror::Error;

use velo_core::CartError;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying storage backend failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// State could not be encoded for the durable mirror.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A cart operation was rejected before anything was persisted.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_passes_through() {
        let err: StoreError = CartError::IndexOutOfBounds { index: 2, len: 0 }.into();
        assert_eq!(
            err.to_string(),
            "cart line index 2 out of bounds (cart has 0 lines)"
        );
    }
}
