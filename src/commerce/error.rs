//! Error types for the commerce gateway.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommerceError {
    /// The platform refused the draft order.
    #[error("Draft order rejected: {0}")]
    Rejected(String),

    /// The platform could not be reached.
    #[error("Commerce platform unavailable: {0}")]
    Unavailable(String),
}
