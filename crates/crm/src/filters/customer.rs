//! Filter criteria for customer scans.

use super::contains_ci;
use crate::model::Customer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter criteria for customers. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerFilter {
    /// Case-insensitive substring match on the customer name.
    pub name: Option<String>,
    /// Case-insensitive substring match on the email address.
    pub email: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub created_at_gte: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub created_at_lte: Option<DateTime<Utc>>,
    /// Country-prefix screen: a pattern starting with `+1` keeps only
    /// customers whose phone is present and starts with `+1`. Any other
    /// pattern applies no restriction.
    pub phone_pattern: Option<String>,
}

impl CustomerFilter {
    /// Returns true when the customer satisfies every present criterion.
    pub fn matches(&self, customer: &Customer) -> bool {
        if let Some(name) = &self.name {
            if !contains_ci(&customer.name, name) {
                return false;
            }
        }
        if let Some(email) = &self.email {
            if !contains_ci(&customer.email, email) {
                return false;
            }
        }
        if let Some(gte) = &self.created_at_gte {
            if customer.created_at < *gte {
                return false;
            }
        }
        if let Some(lte) = &self.created_at_lte {
            if customer.created_at > *lte {
                return false;
            }
        }
        if let Some(pattern) = &self.phone_pattern {
            if pattern.starts_with("+1") {
                match &customer.phone {
                    Some(phone) if phone.starts_with("+1") => {}
                    _ => return false,
                }
            }
        }
        true
    }
}
