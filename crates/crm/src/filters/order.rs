//! Filter criteria for order scans.
//!
//! [`OrderFilter`] is the caller-facing shape and may reference related
//! customer and product names. Name criteria cannot be evaluated inside the
//! order store alone, so [`OrderClient`](crate::clients::OrderClient) first
//! resolves them to id-sets against the sibling stores, producing the
//! [`ResolvedOrderFilter`] the store evaluates locally.

use crate::model::{CustomerId, Order, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Filter criteria for orders. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    /// Inclusive lower bound on the order total.
    pub total_amount_gte: Option<Decimal>,
    /// Inclusive upper bound on the order total.
    pub total_amount_lte: Option<Decimal>,
    /// Inclusive lower bound on the order date.
    pub order_date_gte: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the order date.
    pub order_date_lte: Option<DateTime<Utc>>,
    /// Case-insensitive substring match on the linked customer's name.
    pub customer_name: Option<String>,
    /// Case-insensitive substring match on any attached product's name.
    pub product_name: Option<String>,
    /// Keeps orders containing exactly this product id.
    pub product_id: Option<ProductId>,
}

/// An order filter whose relationship criteria are already resolved to
/// id-sets. An empty id-set matches no orders.
#[derive(Debug, Clone, Default)]
pub struct ResolvedOrderFilter {
    pub total_amount_gte: Option<Decimal>,
    pub total_amount_lte: Option<Decimal>,
    pub order_date_gte: Option<DateTime<Utc>>,
    pub order_date_lte: Option<DateTime<Utc>>,
    /// The order's customer must be one of these (resolved from `customer_name`).
    pub customer_ids: Option<HashSet<CustomerId>>,
    /// The order must contain at least one of these (resolved from `product_name`).
    pub product_ids: Option<HashSet<ProductId>>,
    /// Keeps orders containing exactly this product id.
    pub product_id: Option<ProductId>,
}

impl ResolvedOrderFilter {
    /// Returns true when the order satisfies every present criterion.
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(gte) = &self.total_amount_gte {
            if order.total_amount < *gte {
                return false;
            }
        }
        if let Some(lte) = &self.total_amount_lte {
            if order.total_amount > *lte {
                return false;
            }
        }
        if let Some(gte) = &self.order_date_gte {
            if order.order_date < *gte {
                return false;
            }
        }
        if let Some(lte) = &self.order_date_lte {
            if order.order_date > *lte {
                return false;
            }
        }
        if let Some(customer_ids) = &self.customer_ids {
            if !customer_ids.contains(&order.customer_id) {
                return false;
            }
        }
        if let Some(product_ids) = &self.product_ids {
            if !order.product_ids.iter().any(|id| product_ids.contains(id)) {
                return false;
            }
        }
        if let Some(product_id) = &self.product_id {
            if !order.product_ids.contains(product_id) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderId;
    use chrono::TimeZone;

    fn order(customer: u32, products: &[u32], total: &str) -> Order {
        Order {
            id: OrderId(1),
            customer_id: CustomerId(customer),
            product_ids: products.iter().map(|p| ProductId(*p)).collect(),
            total_amount: total.parse().unwrap(),
            order_date: Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(ResolvedOrderFilter::default().matches(&order(1, &[1, 2], "1029.98")));
    }

    #[test]
    fn total_amount_bounds_are_inclusive() {
        let o = order(1, &[1], "999.99");
        let filter = ResolvedOrderFilter {
            total_amount_gte: Some("999.99".parse().unwrap()),
            total_amount_lte: Some("999.99".parse().unwrap()),
            ..Default::default()
        };
        assert!(filter.matches(&o));

        let filter = ResolvedOrderFilter {
            total_amount_gte: Some("1000.00".parse().unwrap()),
            ..Default::default()
        };
        assert!(!filter.matches(&o));
    }

    #[test]
    fn order_date_bounds_are_inclusive() {
        let o = order(1, &[1], "10.00");
        let filter = ResolvedOrderFilter {
            order_date_gte: Some(o.order_date),
            order_date_lte: Some(o.order_date),
            ..Default::default()
        };
        assert!(filter.matches(&o));
    }

    #[test]
    fn customer_id_set_restricts_membership() {
        let filter = ResolvedOrderFilter {
            customer_ids: Some([CustomerId(1)].into_iter().collect()),
            ..Default::default()
        };
        assert!(filter.matches(&order(1, &[1], "10.00")));
        assert!(!filter.matches(&order(2, &[1], "10.00")));
    }

    #[test]
    fn empty_customer_id_set_matches_nothing() {
        let filter = ResolvedOrderFilter {
            customer_ids: Some(HashSet::new()),
            ..Default::default()
        };
        assert!(!filter.matches(&order(1, &[1], "10.00")));
    }

    #[test]
    fn product_id_set_matches_any_attached_product() {
        let filter = ResolvedOrderFilter {
            product_ids: Some([ProductId(2)].into_iter().collect()),
            ..Default::default()
        };
        assert!(filter.matches(&order(1, &[1, 2], "10.00")));
        assert!(!filter.matches(&order(1, &[1, 3], "10.00")));
    }

    #[test]
    fn exact_product_id_matches_containment() {
        let filter = ResolvedOrderFilter {
            product_id: Some(ProductId(2)),
            ..Default::default()
        };
        assert!(filter.matches(&order(1, &[1, 2], "10.00")));
        assert!(!filter.matches(&order(1, &[1], "10.00")));
    }
}
