//! Error types for the supplier actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SupplierError {
    #[error("Supplier not found: {0}")]
    NotFound(String),

    /// A required field was left blank.
    #[error("Supplier validation error: {0} is required")]
    MissingField(&'static str),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SupplierError {
    fn from(msg: String) -> Self {
        SupplierError::ActorCommunicationError(msg)
    }
}
