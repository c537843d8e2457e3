//! Error types for the branch actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BranchError {
    #[error("Branch not found: {0}")]
    NotFound(String),

    #[error("Branch validation error: {0} is required")]
    MissingField(&'static str),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BranchError {
    fn from(msg: String) -> Self {
        BranchError::ActorCommunicationError(msg)
    }
}
