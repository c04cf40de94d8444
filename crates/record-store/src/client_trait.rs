//! # RecordClient Trait
//!
//! Provides a common interface for entity-specific clients, adding default
//! `get` and `list` methods built on top of a generic `StoreClient`.

use crate::{Record, StoreClient, StoreError};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit the shared read operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// the operations every collection supports. A wrapper client implements
/// `inner` and `map_error` and receives `get` and `list` for free, with the
/// store error mapped into its own domain error.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct CustomerClient {
///     inner: StoreClient<Customer>,
/// }
///
/// #[async_trait]
/// impl RecordClient<Customer> for CustomerClient {
///     type Error = CustomerError;
///
///     fn inner(&self) -> &StoreClient<Customer> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError<CustomerError>) -> CustomerError {
///         match e {
///             StoreError::Record(inner) => inner,
///             other => CustomerError::ActorCommunicationError(other.to_string()),
///         }
///     }
/// }
///
/// // get() and list() are provided automatically:
/// // let customer = client.get(CustomerId(1)).await?;
/// // let everyone = client.list().await?;
/// ```
#[async_trait]
pub trait RecordClient<T: Record>: Send + Sync {
    /// The entity-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the specific domain error type.
    fn map_error(e: StoreError<T::Error>) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every record in the collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
