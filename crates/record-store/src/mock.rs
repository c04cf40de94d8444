//! # Mock Store & Testing Utilities
//!
//! The [`MockClient`] type serves the same `StoreClient<T>` API as a real
//! actor but answers from an in-memory expectation queue. It lets you write
//! fast, deterministic unit tests for client logic without spawning any
//! actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Example
//!
//! ```rust
//! use record_store::mock::MockClient;
//! use record_store::Record;
//! use async_trait::async_trait;
//! use std::collections::HashMap;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Tag { id: u32, label: String }
//! #[derive(Debug)] struct TagDraft { label: String }
//! #[derive(Debug)] enum TagQuery {}
//! #[derive(Debug)] enum TagQueryResult {}
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! #[async_trait]
//! impl Record for Tag {
//!     type Id = u32;
//!     type Draft = TagDraft;
//!     type Query = TagQuery;
//!     type QueryResult = TagQueryResult;
//!     type Context = ();
//!     type Error = TagError;
//!     fn from_draft(id: u32, draft: TagDraft) -> Result<Self, Self::Error> {
//!         Ok(Self { id, label: draft.label })
//!     }
//!     fn answer(query: TagQuery, _records: &HashMap<u32, Tag>) -> TagQueryResult {
//!         match query {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Set expectations
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_get(1).return_ok(Some(Tag { id: 1, label: "vip".into() }));
//!
//!     // 2. Drive the code under test through the mock's client
//!     let client = mock.client();
//!     let tag = client.get(1).await.unwrap();
//!     assert_eq!(tag.unwrap().label, "vip");
//!
//!     // 3. Ensure every expectation was consumed
//!     mock.verify();
//! }
//! ```
//!
//! ## Raw channel helpers
//!
//! [`create_mock_client`] returns a client plus the raw request receiver,
//! for tests that want to assert on the exact message a client sent and
//! answer it by hand.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::{BulkReport, StoreRequest};
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
///
/// This enum is used internally by `MockClient` to track what requests are
/// expected and what responses should be returned.
enum Expectation<T: Record> {
    Insert {
        response: Result<T, StoreError<T::Error>>,
    },
    InsertMany {
        response: Result<BulkReport<T>, StoreError<T::Error>>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError<T::Error>>,
    },
    List {
        response: Result<Vec<T>, StoreError<T::Error>>,
    },
    Query {
        response: Result<T::QueryResult, StoreError<T::Error>>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Customer>::new();
/// mock.expect_get(CustomerId(1)).return_ok(Some(customer));
/// mock.expect_insert().return_ok(created);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: Record> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before answering

                match (request, expectation) {
                    (
                        StoreRequest::Insert {
                            draft: _,
                            respond_to,
                        },
                        Some(Expectation::Insert { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::InsertMany {
                            drafts: _,
                            respond_to,
                        },
                        Some(Expectation::InsertMany { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Query {
                            query: _,
                            respond_to,
                        },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects an `insert` operation.
    pub fn expect_insert(&mut self) -> InsertExpectationBuilder<T> {
        InsertExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `insert_many` operation.
    pub fn expect_insert_many(&mut self) -> InsertManyExpectationBuilder<T> {
        InsertManyExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query` operation.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<T> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `insert` expectations.
pub struct InsertExpectationBuilder<T: Record> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Record> InsertExpectationBuilder<T> {
    /// Sets the expectation to return the created record.
    pub fn return_ok(self, record: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Insert {
            response: Ok(record),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError<T::Error>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Insert {
            response: Err(error),
        });
    }
}

/// Builder for `insert_many` expectations.
pub struct InsertManyExpectationBuilder<T: Record> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Record> InsertManyExpectationBuilder<T> {
    /// Sets the expectation to return the bulk report.
    pub fn return_ok(self, report: BulkReport<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::InsertMany {
            response: Ok(report),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError<T::Error>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::InsertMany {
            response: Err(error),
        });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: Record> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Record> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError<T::Error>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: Record> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Record> ListExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, records: Vec<T>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response: Ok(records),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError<T::Error>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List {
            response: Err(error),
        });
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<T: Record> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: Record> QueryExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::QueryResult) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Query {
            response: Ok(result),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError<T::Error>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Query {
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit tests we don't want to spin up a full `StoreActor` if we are
/// just testing the *client* logic (e.g. an order client's orchestration).
///
/// This client sends messages to a channel the test controls. The test can
/// inspect the messages arriving on that channel, assert they are correct,
/// and answer them by hand to simulate the actor's behavior (success,
/// failure, delays) deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: Record>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Insert request.
pub async fn expect_insert<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Draft,
    tokio::sync::oneshot::Sender<Result<T, StoreError<T::Error>>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request.
pub async fn expect_get<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, StoreError<T::Error>>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request.
pub async fn expect_query<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Query,
    tokio::sync::oneshot::Sender<Result<T::QueryResult, StoreError<T::Error>>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}
