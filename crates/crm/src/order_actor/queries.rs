//! Collection queries for the Order actor.
//!
//! The only query takes a [`ResolvedOrderFilter`]: relationship criteria
//! are resolved to id-sets by the client before the message is sent, so
//! the store evaluates every criterion locally.

use crate::filters::ResolvedOrderFilter;
use crate::model::Order;

/// Collection queries for Order records.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    /// Returns every order matching the resolved filter.
    Matching(ResolvedOrderFilter),
}

/// Results from OrderQueries - variants match 1:1 with OrderQuery
#[derive(Debug, Clone)]
pub enum OrderQueryResult {
    /// Result from Matching - every matching order
    Matching(Vec<Order>),
}
