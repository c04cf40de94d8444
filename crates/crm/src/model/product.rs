use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Represents a product in the catalog.
///
/// # Record Store
/// This struct implements the [`Record`](record_store::Record) trait,
/// allowing it to be managed by a [`StoreActor`](record_store::StoreActor).
///
/// See [`impl Record for Product`](#impl-Record-for-Product) for details on:
/// - Creation payload ([`ProductInput`])
/// - Collection queries ([`ProductQuery`](crate::product_actor::ProductQuery))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
}

/// Payload for creating a new product.
///
/// `stock` defaults to 0 when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: Decimal,
    pub stock: Option<i32>,
}
