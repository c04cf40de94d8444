//! # Customer Actor
//!
//! This module implements the Customer record store, enforcing email
//! uniqueness and phone format on admission.
//!
//! ## Overview
//!
//! The Customer actor is the simplest store in the system: it has no
//! dependencies and no cross-store hooks. Admission checks run inside the
//! actor, which makes the email uniqueness check atomic with the insert.
//!
//! ## Structure
//!
//! - [`record`] - [`Record`](record_store::Record) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`] type for type-safe error handling
//! - [`queries`] - [`CustomerQuery`] and [`CustomerQueryResult`] for collection reads
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use crm::customer_actor;
//! use crm::model::CustomerInput;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create actor and client
//!     let (actor, client) = customer_actor::new();
//!
//!     // Start the actor (no dependencies, so context is ())
//!     tokio::spawn(actor.run(()));
//!
//!     // Use the client
//!     let input = CustomerInput {
//!         name: "Alice".to_string(),
//!         email: "alice@example.com".to_string(),
//!         phone: Some("+1234567890".to_string()),
//!     };
//!     let payload = client.create_customer(input).await?;
//!     assert_eq!(payload.message, "Customer created successfully");
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **No dependencies**: Customer records need no context (Context = ())
//! - **Atomic uniqueness**: Email collisions are caught inside the actor
//! - **Type-safe errors**: All operations return `Result<T, CustomerError>`

pub mod error;
pub mod queries;
pub mod record;

pub use error::*;
pub use queries::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use record_store::StoreActor;

/// Creates a new Customer store actor and its client.
pub fn new() -> (StoreActor<Customer>, CustomerClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = CustomerClient::new(generic_client);
    (actor, client)
}
