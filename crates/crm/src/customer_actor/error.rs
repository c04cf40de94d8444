//! Error types for the Customer actor.

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The phone number is not in an accepted format (mutation-level wording).
    #[error("Phone must be in format +1234567890 or 123-456-7890")]
    PhoneFormat,

    /// The phone number is not in an accepted format (store-level wording,
    /// names the rejected customer).
    #[error("Invalid phone format for {0}")]
    InvalidPhone(String),

    /// The email address is already taken (mutation-level wording).
    #[error("Email already exists")]
    EmailExists,

    /// The email address is already taken (store-level wording, names the
    /// colliding email).
    #[error("Email {0} already exists")]
    DuplicateEmail(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
