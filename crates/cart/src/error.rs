//! Error types for the cart store.

use thiserror::Error;

/// Validation errors returned by cart mutations.
///
/// These are the only errors callers of [`CartStore`](crate::CartStore)
/// mutations ever see. Persistence trouble is handled inside the store
/// (logged and surfaced as a non-blocking notice) so the shopping flow is
/// never interrupted.
#[derive(Debug, Error)]
pub enum CartError {
    /// A mutation was called with a zero quantity.
    #[error("quantity must be at least 1")]
    InvalidQuantity,
}

/// Errors from the durable slot backing the cart.
#[derive(Debug, Error)]
pub enum SlotError {
    /// Reading or writing the slot failed.
    #[error("slot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The slot holds a payload that is not a valid item sequence.
    #[error("malformed slot payload: {0}")]
    Malformed(String),

    /// Serializing the item sequence failed.
    #[error("failed to serialize cart items: {0}")]
    Serialize(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        let err = CartError::InvalidQuantity;
        assert_eq!(err.to_string(), "quantity must be at least 1");
    }

    #[test]
    fn test_slot_error_display() {
        let err = SlotError::Malformed("expected an array".to_string());
        assert_eq!(
            err.to_string(),
            "malformed slot payload: expected an array"
        );
    }
}
