use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::OnceLock;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// Represents a customer in the CRM.
///
/// # Record Store
/// This struct implements the [`Record`](record_store::Record) trait,
/// allowing it to be managed by a [`StoreActor`](record_store::StoreActor).
///
/// See [`impl Record for Customer`](#impl-Record-for-Customer) for details on:
/// - Creation payload ([`CustomerInput`])
/// - Collection queries ([`CustomerQuery`](crate::customer_actor::CustomerQuery))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Result payload for a single customer creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub customer: Customer,
    pub message: String,
}

/// Result payload for a bulk customer creation.
///
/// `customers` holds the records that were created and `errors` holds one
/// human-readable message per rejected input. The two lists are independent:
/// a batch can produce both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCustomerPayload {
    pub customers: Vec<Customer>,
    pub errors: Vec<String>,
}

static PHONE_RE: OnceLock<Regex> = OnceLock::new();

/// Returns true when the phone number is in an accepted format.
///
/// Accepted formats are an optional `+` followed by 10 to 15 digits
/// (e.g. `+1234567890`) or the dashed form `123-456-7890`. The empty
/// string is accepted; a missing phone is never an error.
pub fn phone_is_valid(phone: &str) -> bool {
    if phone.is_empty() {
        return true;
    }
    let re = PHONE_RE
        .get_or_init(|| Regex::new(r"^\+?\d{10,15}$|^\d{3}-\d{3}-\d{4}$").expect("Invalid regex"));
    re.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plus_prefixed_digit_runs() {
        assert!(phone_is_valid("+1234567890"));
        assert!(phone_is_valid("+123456789012345"));
    }

    #[test]
    fn accepts_bare_digit_runs() {
        assert!(phone_is_valid("1234567890"));
    }

    #[test]
    fn accepts_dashed_format() {
        assert!(phone_is_valid("123-456-7890"));
    }

    #[test]
    fn rejects_short_and_malformed_numbers() {
        assert!(!phone_is_valid("12345"));
        assert!(!phone_is_valid("123-45-7890"));
        assert!(!phone_is_valid("not a phone"));
        assert!(!phone_is_valid("+1234567890123456"));
    }

    #[test]
    fn empty_phone_skips_validation() {
        assert!(phone_is_valid(""));
    }
}
