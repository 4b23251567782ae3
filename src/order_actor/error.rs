//! Error types for the order actor.

use crate::commerce::CommerceError;
use thiserror::Error;

/// Errors that can occur while submitting or reading draft orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The snapshot is not fit for submission, e.g. `No items in order`.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The commerce platform failed to create the draft order.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// The actor answered with a result that does not match the action sent.
    #[error("Unexpected action result: {0}")]
    UnexpectedResult(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
