//! # Generic Store Client
//!
//! This module defines the generic client for communicating with store
//! actors.

use crate::error::StoreError;
use crate::message::{BulkReport, StoreRequest};
use crate::record::Record;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a
/// [`StoreActor`](crate::actor::StoreActor).
///
/// Holds only a sender, so cloning is inexpensive and clones can be shared
/// across tasks. All methods are async and resolve to
/// `Result<…, StoreError<T::Error>>`: domain errors raised by the record's
/// hooks come back as [`StoreError::Record`], channel failures as
/// [`StoreError::Closed`] / [`StoreError::Dropped`].
#[derive(Clone)]
pub struct StoreClient<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Record> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn insert(&self, draft: T::Draft) -> Result<T, StoreError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Insert { draft, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn insert_many(
        &self,
        drafts: Vec<T::Draft>,
    ) -> Result<BulkReport<T>, StoreError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::InsertMany { drafts, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn query(&self, query: T::Query) -> Result<T::QueryResult, StoreError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Query { query, respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}
