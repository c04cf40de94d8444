//! Record trait implementation for the Product domain type.
//!
//! This module contains the [`Record`] trait implementation that enables
//! [`Product`] to be managed by the generic [`StoreActor`](record_store::StoreActor).

use super::error::ProductError;
use super::queries::{ProductQuery, ProductQueryResult};
use crate::model::{Product, ProductId, ProductInput};
use async_trait::async_trait;
use record_store::Record;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

#[async_trait]
impl Record for Product {
    type Id = ProductId;
    type Draft = ProductInput;
    type Query = ProductQuery;
    type QueryResult = ProductQueryResult;
    type Context = ();
    type Error = ProductError;

    /// Range checks for a new product: positive price, non-negative stock.
    fn admit(
        draft: &ProductInput,
        _records: &HashMap<ProductId, Product>,
    ) -> Result<(), ProductError> {
        if draft.price <= Decimal::ZERO {
            return Err(ProductError::InvalidPrice);
        }
        if draft.stock.unwrap_or(0) < 0 {
            return Err(ProductError::InvalidStock);
        }
        Ok(())
    }

    fn from_draft(id: ProductId, draft: ProductInput) -> Result<Self, ProductError> {
        Ok(Self {
            id,
            name: draft.name,
            price: draft.price,
            stock: draft.stock.unwrap_or(0),
        })
    }

    /// Answers collection queries.
    ///
    /// `WithIds` returns the subset of requested products that exist, in
    /// input order, with duplicate ids ignored. Nonexistent ids are dropped
    /// silently. `Matching` runs the Filter Engine over the catalog.
    fn answer(query: ProductQuery, records: &HashMap<ProductId, Product>) -> ProductQueryResult {
        match query {
            ProductQuery::WithIds(ids) => {
                let mut seen = HashSet::new();
                let mut found = Vec::new();
                for id in ids {
                    if seen.insert(id.clone()) {
                        if let Some(product) = records.get(&id) {
                            found.push(product.clone());
                        }
                    }
                }
                ProductQueryResult::WithIds(found)
            }
            ProductQuery::Matching(filter) => ProductQueryResult::Matching(
                records
                    .values()
                    .filter(|p| filter.matches(p))
                    .cloned()
                    .collect(),
            ),
        }
    }
}
