//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The price is zero or negative.
    #[error("Price must be positive")]
    InvalidPrice,

    /// The stock count is negative.
    #[error("Stock cannot be negative")]
    InvalidStock,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
