//! Record trait implementation for the Customer domain type.
//!
//! This module contains the [`Record`] trait implementation that enables
//! [`Customer`] to be managed by the generic [`StoreActor`](record_store::StoreActor).
//!
//! See the trait implementation on [`Customer`] for method documentation.

use super::error::CustomerError;
use super::queries::{CustomerQuery, CustomerQueryResult};
use crate::model::{phone_is_valid, Customer, CustomerId, CustomerInput};
use async_trait::async_trait;
use chrono::Utc;
use record_store::Record;
use std::collections::HashMap;

#[async_trait]
impl Record for Customer {
    type Id = CustomerId;
    type Draft = CustomerInput;
    type Query = CustomerQuery;
    type QueryResult = CustomerQueryResult;
    type Context = ();
    type Error = CustomerError;

    /// Admission checks for a new customer: email uniqueness first, then
    /// phone format. Running inside the actor makes check-and-insert atomic.
    fn admit(
        draft: &CustomerInput,
        records: &HashMap<CustomerId, Customer>,
    ) -> Result<(), CustomerError> {
        if records.values().any(|c| c.email == draft.email) {
            return Err(CustomerError::DuplicateEmail(draft.email.clone()));
        }
        if let Some(phone) = &draft.phone {
            if !phone_is_valid(phone) {
                return Err(CustomerError::InvalidPhone(draft.name.clone()));
            }
        }
        Ok(())
    }

    fn from_draft(id: CustomerId, draft: CustomerInput) -> Result<Self, CustomerError> {
        Ok(Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            created_at: Utc::now(),
        })
    }

    /// Answers collection queries.
    ///
    /// `FindByEmail` is an exact, case-sensitive lookup; `Matching` runs the
    /// Filter Engine over every customer.
    fn answer(
        query: CustomerQuery,
        records: &HashMap<CustomerId, Customer>,
    ) -> CustomerQueryResult {
        match query {
            CustomerQuery::FindByEmail(email) => CustomerQueryResult::FindByEmail(
                records.values().find(|c| c.email == email).cloned(),
            ),
            CustomerQuery::Matching(filter) => CustomerQueryResult::Matching(
                records
                    .values()
                    .filter(|c| filter.matches(c))
                    .cloned()
                    .collect(),
            ),
        }
    }
}
