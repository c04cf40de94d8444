//! Record trait implementation for the Order domain type.
//!
//! Unlike Customer and Product, the Order record has real work in its
//! `on_create` hook: it validates the referenced customer, resolves the
//! product ids against the Product store, and derives `total_amount`.

use super::error::OrderError;
use super::queries::{OrderQuery, OrderQueryResult};
use super::OrderContext;
use crate::model::{Order, OrderId, OrderInput};
use async_trait::async_trait;
use chrono::Utc;
use record_store::{Record, RecordClient};
use rust_decimal::Decimal;
use std::collections::HashMap;

#[async_trait]
impl Record for Order {
    type Id = OrderId;
    type Draft = OrderInput;
    type Query = OrderQuery;
    type QueryResult = OrderQueryResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_draft(id: OrderId, draft: OrderInput) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            customer_id: draft.customer_id,
            product_ids: draft.product_ids,
            // Derived in on_create once the product list is resolved
            total_amount: Decimal::ZERO,
            order_date: draft.order_date.unwrap_or_else(Utc::now),
        })
    }

    /// Cross-store validation and derivation.
    ///
    /// The referenced customer must exist. Product ids are resolved through
    /// the Product store; nonexistent ids are dropped and the order keeps
    /// only the surviving ids. At least one product must survive.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let (customers, products) = ctx;

        let customer = customers
            .get(self.customer_id.clone())
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        if customer.is_none() {
            return Err(OrderError::InvalidCustomer);
        }

        let found = products
            .products_by_ids(self.product_ids.clone())
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        if found.is_empty() {
            return Err(OrderError::NoValidProducts);
        }

        self.product_ids = found.iter().map(|p| p.id.clone()).collect();
        self.total_amount = found.iter().map(|p| p.price).sum();
        Ok(())
    }

    fn answer(query: OrderQuery, records: &HashMap<OrderId, Order>) -> OrderQueryResult {
        match query {
            OrderQuery::Matching(filter) => OrderQueryResult::Matching(
                records
                    .values()
                    .filter(|o| filter.matches(o))
                    .cloned()
                    .collect(),
            ),
        }
    }
}
