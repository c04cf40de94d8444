//! # Order Actor
//!
//! This module implements the Order record store. Orders reference
//! customers and products, so creation is orchestrated across stores: the
//! actor runs with a context of sibling clients and validates references in
//! the [`Record::on_create`](record_store::Record::on_create) hook.
//!
//! ## Structure
//!
//! - [`record`] - [`Record`](record_store::Record) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`queries`] - [`OrderQuery`] and [`OrderQueryResult`] for collection reads
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Creation Flow
//!
//! 1. The customer id is checked against the Customer store
//!    (`Invalid customer ID` when absent)
//! 2. Product ids are resolved through the Product store; ids that do not
//!    exist are dropped
//! 3. An order whose product list resolves to nothing is rejected
//!    (`No valid products selected`)
//! 4. `total_amount` becomes the sum of the surviving products' prices

pub mod error;
pub mod queries;
pub mod record;

pub use error::*;
pub use queries::*;

use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::model::Order;
use record_store::StoreActor;

/// Context injected into the Order actor: the sibling clients used for
/// reference validation during `on_create`.
pub type OrderContext = (CustomerClient, ProductClient);

/// Creates a new Order store actor and its client.
pub fn new(
    customer_client: CustomerClient,
    product_client: ProductClient,
) -> (StoreActor<Order>, OrderClient) {
    let (actor, generic_client) = StoreActor::new(32);
    let client = OrderClient::new(generic_client, customer_client, product_client);
    (actor, client)
}
