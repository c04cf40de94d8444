//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `StoreClient<Product>` and exposes domain-specific methods.

use crate::filters::ProductFilter;
use crate::model::{Product, ProductId, ProductInput};
use crate::product_actor::{ProductError, ProductQuery, ProductQueryResult};
use async_trait::async_trait;
use record_store::{RecordClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<Product>,
}

impl ProductClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError<ProductError>) -> Self::Error {
        match e {
            StoreError::Record(inner) => inner,
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Creates a product.
    ///
    /// Range validation runs in the store's admission check; a missing
    /// stock count defaults to 0.
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: ProductInput) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.insert(input).await.map_err(Self::map_error)
    }

    /// Resolves a batch of ids to the products that exist.
    ///
    /// Input order is preserved, duplicates are ignored, and nonexistent
    /// ids are dropped without error.
    #[instrument(skip(self, ids))]
    pub async fn products_by_ids(&self, ids: Vec<ProductId>) -> Result<Vec<Product>, ProductError> {
        debug!("Resolving {} product ids", ids.len());
        match self.inner.query(ProductQuery::WithIds(ids)).await {
            Ok(ProductQueryResult::WithIds(products)) => Ok(products),
            Ok(_) => unreachable!("WithIds query must return WithIds result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Returns every product matching the filter.
    #[instrument(skip(self, filter))]
    pub async fn filter_products(&self, filter: ProductFilter) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        match self.inner.query(ProductQuery::Matching(filter)).await {
            Ok(ProductQueryResult::Matching(products)) => Ok(products),
            Ok(_) => unreachable!("Matching query must return Matching result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_store::mock::{create_mock_client, expect_insert, expect_query};

    fn laptop() -> Product {
        Product {
            id: ProductId(1),
            name: "Laptop".into(),
            price: "999.99".parse().unwrap(),
            stock: 10,
        }
    }

    #[tokio::test]
    async fn test_products_by_ids_sends_with_ids_query() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        // Spawn task to call products_by_ids
        let resolve_task = tokio::spawn(async move {
            product_client
                .products_by_ids(vec![ProductId(1), ProductId(99)])
                .await
        });

        // Expect the query request
        let (query, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");

        match &query {
            ProductQuery::WithIds(ids) => assert_eq!(ids, &vec![ProductId(1), ProductId(99)]),
            _ => panic!("Expected WithIds query"),
        }

        // Respond with the surviving product
        responder
            .send(Ok(ProductQueryResult::WithIds(vec![laptop()])))
            .unwrap();

        // Verify the result
        let result = resolve_task.await.unwrap();
        assert_eq!(result.unwrap(), vec![laptop()]);
    }

    #[tokio::test]
    async fn test_create_product_round_trip() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let create_task = tokio::spawn(async move {
            product_client
                .create_product(ProductInput {
                    name: "Laptop".into(),
                    price: "999.99".parse().unwrap(),
                    stock: Some(10),
                })
                .await
        });

        let (draft, responder) = expect_insert(&mut receiver)
            .await
            .expect("Expected Insert request");
        assert_eq!(draft.name, "Laptop");

        responder.send(Ok(laptop())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap().id, ProductId(1));
    }

    #[tokio::test]
    async fn test_store_rejection_surfaces_domain_error() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let create_task = tokio::spawn(async move {
            product_client
                .create_product(ProductInput {
                    name: "Broken".into(),
                    price: "-1".parse().unwrap(),
                    stock: None,
                })
                .await
        });

        let (_draft, responder) = expect_insert(&mut receiver)
            .await
            .expect("Expected Insert request");

        responder
            .send(Err(StoreError::Record(ProductError::InvalidPrice)))
            .unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap_err(), ProductError::InvalidPrice);
    }
}
