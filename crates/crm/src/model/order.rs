use crate::model::{CustomerId, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Represents a customer order.
///
/// # Record Store
/// This struct implements the [`Record`](record_store::Record) trait,
/// allowing it to be managed by a [`StoreActor`](record_store::StoreActor).
///
/// See [`impl Record for Order`](#impl-Record-for-Order) for details on:
/// - Creation payload ([`OrderInput`])
/// - Collection queries ([`OrderQuery`](crate::order_actor::OrderQuery))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub product_ids: Vec<ProductId>,
    pub total_amount: Decimal,
    pub order_date: DateTime<Utc>,
}

/// Payload for creating a new order.
///
/// `order_date` defaults to the current time when omitted. Product ids
/// that do not exist are dropped during creation; the stored order keeps
/// only the surviving ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderInput {
    pub customer_id: CustomerId,
    pub product_ids: Vec<ProductId>,
    pub order_date: Option<DateTime<Utc>>,
}
