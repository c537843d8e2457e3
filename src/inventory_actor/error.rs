//! Error types for the inventory actor.

use thiserror::Error;

/// Errors that can occur during product and stock operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// Zero-unit reservations and releases are refused.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// A stock receipt is missing a required field.
    #[error("Invalid stock receipt: {0}")]
    InvalidReceipt(String),

    /// A product payload is missing its name or SKU.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for InventoryError {
    fn from(msg: String) -> Self {
        InventoryError::ActorCommunicationError(msg)
    }
}
