//! # Customer Client
//!
//! Provides a high-level API for interacting with the `Customer` actor.
//! It wraps a `StoreClient<Customer>` and exposes the customer mutation and
//! query surface.

use crate::customer_actor::{CustomerError, CustomerQuery, CustomerQueryResult};
use crate::filters::CustomerFilter;
use crate::model::{phone_is_valid, BulkCustomerPayload, Customer, CustomerInput, CustomerPayload};
use async_trait::async_trait;
use record_store::{RecordClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: StoreClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: StoreClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &StoreClient<Customer> {
        &self.inner
    }

    fn map_error(e: StoreError<CustomerError>) -> Self::Error {
        match e {
            StoreError::Record(inner) => inner,
            other => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CustomerClient {
    /// Creates a single customer.
    ///
    /// Mutation-level checks run before the store is involved: phone format
    /// first, then email existence. The store's admission check repeats the
    /// uniqueness test atomically, so two concurrent creates with the same
    /// email cannot both succeed.
    #[instrument(skip(self, input))]
    pub async fn create_customer(
        &self,
        input: CustomerInput,
    ) -> Result<CustomerPayload, CustomerError> {
        debug!("Sending request");
        if let Some(phone) = &input.phone {
            if !phone_is_valid(phone) {
                return Err(CustomerError::PhoneFormat);
            }
        }
        if self.find_by_email(&input.email).await?.is_some() {
            return Err(CustomerError::EmailExists);
        }

        let customer = self.inner.insert(input).await.map_err(Self::map_error)?;
        Ok(CustomerPayload {
            customer,
            message: "Customer created successfully".to_string(),
        })
    }

    /// Creates a batch of customers in one store message.
    ///
    /// Item failures never fail the call: each rejected input contributes
    /// its message to `errors` while earlier successes stay inserted. Later
    /// items see earlier batch items, so an email introduced by one item
    /// collides with a repeat later in the same batch.
    #[instrument(skip(self, inputs))]
    pub async fn bulk_create_customers(
        &self,
        inputs: Vec<CustomerInput>,
    ) -> Result<BulkCustomerPayload, CustomerError> {
        debug!("Sending batch of {} inputs", inputs.len());
        let report = self
            .inner
            .insert_many(inputs)
            .await
            .map_err(Self::map_error)?;
        Ok(BulkCustomerPayload {
            customers: report.created,
            errors: report.errors.iter().map(|e| e.to_string()).collect(),
        })
    }

    /// Looks up a customer by exact email address (case-sensitive).
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError> {
        debug!("Sending request");
        match self
            .inner
            .query(CustomerQuery::FindByEmail(email.to_string()))
            .await
        {
            Ok(CustomerQueryResult::FindByEmail(found)) => Ok(found),
            Ok(_) => unreachable!("FindByEmail query must return FindByEmail result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Returns every customer matching the filter.
    #[instrument(skip(self, filter))]
    pub async fn filter_customers(
        &self,
        filter: CustomerFilter,
    ) -> Result<Vec<Customer>, CustomerError> {
        debug!("Sending request");
        match self.inner.query(CustomerQuery::Matching(filter)).await {
            Ok(CustomerQueryResult::Matching(customers)) => Ok(customers),
            Ok(_) => unreachable!("Matching query must return Matching result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CustomerId;
    use chrono::Utc;
    use record_store::mock::MockClient;
    use record_store::BulkReport;

    fn alice(id: u32) -> Customer {
        Customer {
            id: CustomerId(id),
            name: "Alice".into(),
            email: "alice@example.com".into(),
            phone: Some("+1234567890".into()),
            created_at: Utc::now(),
        }
    }

    fn alice_input() -> CustomerInput {
        CustomerInput {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            phone: Some("+1234567890".into()),
        }
    }

    #[tokio::test]
    async fn create_customer_returns_payload_with_message() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_query()
            .return_ok(CustomerQueryResult::FindByEmail(None));
        mock.expect_insert().return_ok(alice(1));

        let client = CustomerClient::new(mock.client());
        let payload = client.create_customer(alice_input()).await.unwrap();
        assert_eq!(payload.customer.id, CustomerId(1));
        assert_eq!(payload.message, "Customer created successfully");
        mock.verify();
    }

    #[tokio::test]
    async fn create_customer_rejects_bad_phone_before_any_request() {
        let mock = MockClient::<Customer>::new();
        let client = CustomerClient::new(mock.client());

        let input = CustomerInput {
            phone: Some("12345".into()),
            ..alice_input()
        };
        let err = client.create_customer(input).await.unwrap_err();
        assert_eq!(err, CustomerError::PhoneFormat);
        assert_eq!(
            err.to_string(),
            "Phone must be in format +1234567890 or 123-456-7890"
        );
        mock.verify();
    }

    #[tokio::test]
    async fn create_customer_rejects_existing_email() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_query()
            .return_ok(CustomerQueryResult::FindByEmail(Some(alice(1))));

        let client = CustomerClient::new(mock.client());
        let err = client.create_customer(alice_input()).await.unwrap_err();
        assert_eq!(err, CustomerError::EmailExists);
        assert_eq!(err.to_string(), "Email already exists");
        mock.verify();
    }

    #[tokio::test]
    async fn bulk_create_stringifies_item_errors() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_insert_many().return_ok(BulkReport {
            created: vec![alice(1)],
            errors: vec![
                CustomerError::DuplicateEmail("alice@example.com".into()),
                CustomerError::InvalidPhone("Eve".into()),
            ],
        });

        let client = CustomerClient::new(mock.client());
        let inputs = vec![
            alice_input(),
            CustomerInput {
                name: "Alice Again".into(),
                ..alice_input()
            },
            CustomerInput {
                name: "Eve".into(),
                email: "eve@example.com".into(),
                phone: Some("bad".into()),
            },
        ];
        let payload = client.bulk_create_customers(inputs).await.unwrap();
        assert_eq!(payload.customers.len(), 1);
        assert_eq!(
            payload.errors,
            vec![
                "Email alice@example.com already exists".to_string(),
                "Invalid phone format for Eve".to_string(),
            ]
        );
        mock.verify();
    }
}
