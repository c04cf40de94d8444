//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor. It
//! wraps a `StoreClient<Order>` and holds the sibling clients so order
//! filters can reference customer and product names: the client resolves
//! those criteria to id-sets before the store is queried.

use crate::clients::{CustomerClient, ProductClient};
use crate::filters::{CustomerFilter, OrderFilter, ProductFilter, ResolvedOrderFilter};
use crate::model::{Order, OrderInput};
use crate::order_actor::{OrderError, OrderQuery, OrderQueryResult};
use async_trait::async_trait;
use record_store::{RecordClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// Creation-side orchestration (customer validation, product resolution)
/// happens in the Order actor's `on_create` hook; this client carries the
/// sibling clients for the query side, where name criteria are resolved
/// into id-sets.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<Order>,
    customers: CustomerClient,
    products: ProductClient,
}

impl OrderClient {
    pub fn new(
        inner: StoreClient<Order>,
        customers: CustomerClient,
        products: ProductClient,
    ) -> Self {
        Self {
            inner,
            customers,
            products,
        }
    }

    /// Creates an order.
    ///
    /// Reference validation happens in `Order::on_create` inside the actor.
    #[instrument(skip(self, input))]
    pub async fn create_order(&self, input: OrderInput) -> Result<Order, OrderError> {
        debug!(?input, "create_order called");
        self.inner.insert(input).await.map_err(Self::map_error)
    }

    /// Returns every order matching the filter.
    ///
    /// `customer_name` and `product_name` are resolved to id-sets by
    /// scanning the sibling stores first; the order store then evaluates a
    /// fully local [`ResolvedOrderFilter`]. An empty id-set matches
    /// nothing, so a name matching no customer yields no orders.
    #[instrument(skip(self, filter))]
    pub async fn filter_orders(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        debug!("Resolving relationship criteria");
        let resolved = self.resolve(filter).await?;
        match self.inner.query(OrderQuery::Matching(resolved)).await {
            Ok(OrderQueryResult::Matching(orders)) => Ok(orders),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    async fn resolve(&self, filter: OrderFilter) -> Result<ResolvedOrderFilter, OrderError> {
        let customer_ids = match filter.customer_name {
            Some(name) => {
                let matching = self
                    .customers
                    .filter_customers(CustomerFilter {
                        name: Some(name),
                        ..Default::default()
                    })
                    .await
                    .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
                Some(matching.into_iter().map(|c| c.id).collect())
            }
            None => None,
        };

        let product_ids = match filter.product_name {
            Some(name) => {
                let matching = self
                    .products
                    .filter_products(ProductFilter {
                        name: Some(name),
                        ..Default::default()
                    })
                    .await
                    .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
                Some(matching.into_iter().map(|p| p.id).collect())
            }
            None => None,
        };

        Ok(ResolvedOrderFilter {
            total_amount_gte: filter.total_amount_gte,
            total_amount_lte: filter.total_amount_lte,
            order_date_gte: filter.order_date_gte,
            order_date_lte: filter.order_date_lte,
            customer_ids,
            product_ids,
            product_id: filter.product_id,
        })
    }
}

#[async_trait]
impl RecordClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError<OrderError>) -> Self::Error {
        match e {
            StoreError::Record(inner) => inner,
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
