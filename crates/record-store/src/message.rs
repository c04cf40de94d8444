//! # Store Messages
//!
//! This module defines the generic message types used for communication
//! between the `StoreClient` and `StoreActor`.

use crate::error::StoreError;
use crate::record::Record;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Response<R, E> = oneshot::Sender<Result<R, StoreError<E>>>;

/// Outcome of a bulk insert: every record that made it in, and the typed
/// error for every item that did not. Item order is preserved within each
/// list.
#[derive(Debug)]
pub struct BulkReport<T: Record> {
    pub created: Vec<T>,
    pub errors: Vec<T::Error>,
}

/// Internal message type sent to the actor to request operations.
///
/// The variants cover the lifecycle of an append-only collection: records
/// are inserted (singly or in batches) and read back by id, wholesale, or
/// through entity-specific queries. The associated types of [`Record`] keep
/// every payload matched to its store at compile time, so a Customer draft
/// can never reach a Product actor.
#[derive(Debug)]
pub enum StoreRequest<T: Record> {
    Insert {
        draft: T::Draft,
        respond_to: Response<T, T::Error>,
    },
    InsertMany {
        drafts: Vec<T::Draft>,
        respond_to: Response<BulkReport<T>, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Query {
        query: T::Query,
        respond_to: Response<T::QueryResult, T::Error>,
    },
}
