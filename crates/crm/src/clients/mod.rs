//! Type-safe wrappers around [`StoreClient`](record_store::StoreClient).
//!
//! The clients are the operation surface of the CRM: every mutation and
//! filter scan goes through one of them.

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;
