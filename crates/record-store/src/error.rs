//! # Store Errors
//!
//! This module defines the common error type used throughout the store
//! layer. The domain error `E` stays a typed parameter instead of a boxed
//! trait object, so callers can match on their own variants after a round
//! trip through the actor channel.

/// Errors that can occur when talking to a store actor.
#[derive(Debug, thiserror::Error)]
pub enum StoreError<E: std::error::Error> {
    #[error("Store actor closed")]
    Closed,
    #[error("Store actor dropped response channel")]
    Dropped,
    #[error("Record error: {0}")]
    Record(E),
}
