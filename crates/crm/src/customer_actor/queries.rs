//! Collection queries for the Customer actor.
//!
//! This module defines the read operations that run against the whole
//! customer collection inside the actor. They are handled by the
//! [`Record::answer`](record_store::Record::answer) method.

use crate::filters::CustomerFilter;
use crate::model::Customer;

/// Collection queries for Customer records.
#[derive(Debug, Clone)]
pub enum CustomerQuery {
    /// Looks up a customer by exact email address (case-sensitive).
    FindByEmail(String),
    /// Returns every customer matching the filter.
    Matching(CustomerFilter),
}

/// Results from CustomerQueries - variants match 1:1 with CustomerQuery
#[derive(Debug, Clone)]
pub enum CustomerQueryResult {
    /// Result from FindByEmail - the customer, if any
    FindByEmail(Option<Customer>),
    /// Result from Matching - every matching customer
    Matching(Vec<Customer>),
}
