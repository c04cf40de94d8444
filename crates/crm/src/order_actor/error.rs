//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The referenced customer does not exist.
    #[error("Invalid customer ID")]
    InvalidCustomer,

    /// None of the requested product ids exist.
    #[error("No valid products selected")]
    NoValidProducts,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
