//! # Record Trait
//!
//! The `Record` trait defines the contract that every stored type (Customer,
//! Product, Order, …) must implement to be managed by the generic
//! `StoreActor`. It specifies associated types for ids, creation drafts,
//! collection queries, context, and errors, and provides the hooks the actor
//! calls while processing requests (`admit`, `from_draft`, `on_create`,
//! `answer`).

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by a
/// [`StoreActor`](crate::actor::StoreActor).
///
/// # Architecture Note
/// By defining a contract (`Record`) that all stored types satisfy, the
/// `StoreActor` logic is written *once* and reused for every collection.
/// Associated types keep the API safe: a Customer store only accepts
/// Customer drafts and Customer queries, and the compiler enforces it.
///
/// # Async & Context
/// This trait is `#[async_trait]` so `on_create` can call other actors
/// (e.g. an Order validating its Customer). The `Context` type is injected
/// into the hook at `run()` time, binding dependencies late instead of at
/// construction.
///
/// # Provided Methods (Hooks)
/// `admit` and `on_create` have default implementations that do nothing.
/// Override them only where a collection has admission invariants or
/// derived fields.
#[async_trait]
pub trait Record: Clone + Send + Sync + 'static {
    /// The unique identifier for this record type.
    /// Must be convertible from u32 for automatic id generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record (DTO).
    type Draft: Send + Sync + Debug;

    /// Enum of collection-level read operations (e.g. `FindByEmail`).
    /// Unlike per-record actions, queries see the whole collection.
    type Query: Send + Sync + Debug;

    /// The result type returned by queries. Variants pair 1:1 with
    /// [`Record::Query`] variants.
    type QueryResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this record's admission and creation hooks.
    /// Must implement std::error::Error for proper error propagation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store-wide admission check, run inside the actor before the record
    /// is constructed. Collection invariants (uniqueness, value ranges)
    /// live here: the actor processes one message at a time, so
    /// check-and-insert is atomic.
    fn admit(_draft: &Self::Draft, _records: &HashMap<Self::Id, Self>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Construct the record from the generated id and the draft.
    /// Called synchronously after `admit`, before `on_create`.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Result<Self, Self::Error>;

    /// Called after construction, before the record is stored. The hook can
    /// reach other actors through the context to validate references and
    /// fill derived fields.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Evaluate a query against the full collection.
    fn answer(query: Self::Query, records: &HashMap<Self::Id, Self>) -> Self::QueryResult;
}
