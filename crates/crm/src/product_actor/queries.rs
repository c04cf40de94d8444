//! Collection queries for the Product actor.

use crate::filters::ProductFilter;
use crate::model::{Product, ProductId};

/// Collection queries for Product records.
#[derive(Debug, Clone)]
pub enum ProductQuery {
    /// Resolves a batch of ids to the products that exist.
    ///
    /// Input order is preserved, duplicate ids are ignored, and ids with no
    /// matching product are dropped without error.
    WithIds(Vec<ProductId>),
    /// Returns every product matching the filter.
    Matching(ProductFilter),
}

/// Results from ProductQueries - variants match 1:1 with ProductQuery
#[derive(Debug, Clone)]
pub enum ProductQueryResult {
    /// Result from WithIds - the products that exist
    WithIds(Vec<Product>),
    /// Result from Matching - every matching product
    Matching(Vec<Product>),
}
