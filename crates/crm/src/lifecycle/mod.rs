//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the CRM: starting, wiring,
//! and shutting down the three interdependent store actors.
//!
//! ## The Orchestration Pattern
//!
//! Individual actors are simple; **wiring them together** is where the
//! complexity lives. [`CrmSystem`] is the conductor:
//!
//! 1. **Actor Creation** - Instantiate all actors and their clients
//! 2. **Dependency Injection** - Wire actors together via context injection
//! 3. **Lifecycle Management** - Start actors in the correct order
//! 4. **Graceful Shutdown** - Coordinate clean termination of all actors
//!
//! ## Dependency Injection via Context
//!
//! Dependencies bind late, at `run()` time rather than construction time:
//!
//! ```rust,ignore
//! // No dependencies
//! impl Record for Customer {
//!     type Context = ();
//! }
//!
//! // Depends on the Customer and Product clients
//! impl Record for Order {
//!     type Context = (CustomerClient, ProductClient);
//! }
//! ```
//!
//! This lets `Order` depend on `Customer` and `Product` without circular
//! references during construction.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - Process remaining messages, log final state
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! The Order actor's context holds clones of the Customer and Product
//! clients, but clones never prevent shutdown while the dependency graph
//! is acyclic: each actor shuts down once its own channel closes, and its
//! context drops with it.

pub mod crm_system;

pub use crm_system::*;
