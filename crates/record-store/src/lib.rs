//! # Record Store
//!
//! This crate provides the foundational building blocks for creating type-safe,
//! concurrent record stores in Rust. Each store is an **actor**: a Tokio task
//! that owns its records outright and serves requests over a message channel.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Record Layer** ([`Record`]) - Your domain models and validation logic
//! 2. **Runtime Layer** ([`StoreActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`StoreClient`]) - Type-safe communication
//!
//! You write your domain logic **once** in the record trait, and the store
//! handles all the async message passing, id allocation, and state management.
//!
//! ## Defining and Running a Store
//!
//! ```rust
//! use record_store::{Record, StoreActor};
//! use async_trait::async_trait;
//! use std::collections::HashMap;
//!
//! // 1. Define the Record
//! #[derive(Clone, Debug)]
//! struct Task {
//!     id: u32,
//!     title: String,
//!     done: bool,
//! }
//!
//! #[derive(Debug)] struct TaskDraft { title: String }
//! #[derive(Debug)] enum TaskQuery { Open }
//! #[derive(Debug)] enum TaskQueryResult { Open(Vec<Task>) }
//!
//! #[derive(Debug, thiserror::Error)]
//! enum TaskError {
//!     #[error("Title cannot be empty")]
//!     EmptyTitle,
//! }
//!
//! #[async_trait]
//! impl Record for Task {
//!     type Id = u32;
//!     type Draft = TaskDraft;
//!     type Query = TaskQuery;
//!     type QueryResult = TaskQueryResult;
//!     type Context = ();
//!     type Error = TaskError;
//!
//!     fn admit(draft: &TaskDraft, _records: &HashMap<u32, Task>) -> Result<(), Self::Error> {
//!         if draft.title.is_empty() {
//!             return Err(TaskError::EmptyTitle);
//!         }
//!         Ok(())
//!     }
//!
//!     fn from_draft(id: u32, draft: TaskDraft) -> Result<Self, Self::Error> {
//!         Ok(Self { id, title: draft.title, done: false })
//!     }
//!
//!     fn answer(query: TaskQuery, records: &HashMap<u32, Task>) -> TaskQueryResult {
//!         match query {
//!             TaskQuery::Open => {
//!                 TaskQueryResult::Open(records.values().filter(|t| !t.done).cloned().collect())
//!             }
//!         }
//!     }
//! }
//!
//! // 2. Use the Store
//! #[tokio::main]
//! async fn main() {
//!     // Create actor and client
//!     let (actor, client) = StoreActor::<Task>::new(10);
//!
//!     // Spawn the actor
//!     tokio::spawn(actor.run(()));
//!
//!     // Use the client
//!     let task = client.insert(TaskDraft { title: "Ship it".into() }).await.unwrap();
//!     assert_eq!(task.id, 1);
//!
//!     let TaskQueryResult::Open(open) = client.query(TaskQuery::Open).await.unwrap();
//!     assert_eq!(open.len(), 1);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at
//! construction time. This "late binding" solves circular dependencies: every
//! store is created first, then each actor is started with the clients its
//! records need during [`Record::on_create`].
//!
//! ```rust,ignore
//! // 1. Create all stores (no dependencies yet)
//! let (customer_actor, customers) = StoreActor::<Customer>::new(32);
//! let (order_actor, orders) = StoreActor::<Order>::new(32);
//!
//! // 2. Wire dependencies when starting actors
//! tokio::spawn(customer_actor.run(()));
//! // Order records get the clients they need during on_create
//! tokio::spawn(order_actor.run((customers.clone(), products.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task
//! - Requests are processed **sequentially** within a store (no locks needed!)
//! - Multiple stores run in **parallel** (true concurrency)
//! - No shared mutable state (message passing only)
//!
//! Sequential processing is what makes [`Record::admit`] checks such as
//! uniqueness constraints atomic: no other request can touch the store
//! between the check and the insert.
//!
//! ## Testing
//!
//! The crate provides a **MockClient** type that serves the same
//! `StoreClient<T>` API as a real actor but answers from an expectation
//! queue. It lets you write fast, deterministic unit tests for client logic
//! without spawning any actors. See the [`mock`] module for the full API.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::RecordClient;
pub use error::StoreError;
pub use message::{BulkReport, Response, StoreRequest};
pub use record::Record;
