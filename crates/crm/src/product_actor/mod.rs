//! # Product Actor
//!
//! This module implements the Product record store with price and stock
//! admission checks and an id-set lookup used during order creation.
//!
//! ## Structure
//!
//! - [`record`] - [`Record`](record_store::Record) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`queries`] - [`ProductQuery`] and [`ProductQueryResult`] for collection reads
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Queries
//!
//! ```rust,ignore
//! // Resolve a batch of ids to the products that exist
//! let products = product_client.products_by_ids(ids).await?;
//!
//! // Scan the catalog with the Filter Engine
//! let cheap = product_client.filter_products(ProductFilter {
//!     price_lte: Some("50.00".parse()?),
//!     ..Default::default()
//! }).await?;
//! ```
//!
//! ## Key Features
//!
//! - **Range validation**: `price > 0` and `stock >= 0`, checked on admission
//! - **Id-set resolution**: `WithIds` drops nonexistent ids instead of failing

pub mod error;
pub mod queries;
pub mod record;

pub use error::*;
pub use queries::*;

use crate::clients::ProductClient;
use crate::model::Product;
use record_store::StoreActor;

/// Creates a new Product store actor and its client.
pub fn new() -> (StoreActor<Product>, ProductClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = ProductClient::new(generic_client);
    (actor, client)
}
