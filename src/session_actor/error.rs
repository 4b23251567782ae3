//! Error types for the session actor.

use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The requested session was not found.
    #[error("Session not found: {0}")]
    NotFound(String),

    /// Checkout needs an event type, something in the cart and at least one guest.
    #[error("Session is not ready for checkout: {0}")]
    CheckoutNotReady(String),

    #[error("Buyer information is required for checkout")]
    MissingBuyerInfo,

    /// The actor answered with a result that does not match the action sent.
    #[error("Unexpected action result: {0}")]
    UnexpectedResult(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SessionError {
    fn from(msg: String) -> Self {
        SessionError::ActorCommunicationError(msg)
    }
}
