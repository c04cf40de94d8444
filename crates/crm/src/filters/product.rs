//! Filter criteria for product scans.

use super::contains_ci;
use crate::model::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Filter criteria for products. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring match on the product name.
    pub name: Option<String>,
    /// Inclusive lower bound on price.
    pub price_gte: Option<Decimal>,
    /// Inclusive upper bound on price.
    pub price_lte: Option<Decimal>,
    /// Inclusive lower bound on stock.
    pub stock_gte: Option<i32>,
    /// Inclusive upper bound on stock.
    pub stock_lte: Option<i32>,
}

impl ProductFilter {
    /// Returns true when the product satisfies every present criterion.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if !contains_ci(&product.name, name) {
                return false;
            }
        }
        if let Some(gte) = &self.price_gte {
            if product.price < *gte {
                return false;
            }
        }
        if let Some(lte) = &self.price_lte {
            if product.price > *lte {
                return false;
            }
        }
        if let Some(gte) = self.stock_gte {
            if product.stock < gte {
                return false;
            }
        }
        if let Some(lte) = self.stock_lte {
            if product.stock > lte {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn product(name: &str, price: &str, stock: i32) -> Product {
        Product {
            id: ProductId(1),
            name: name.into(),
            price: price.parse().unwrap(),
            stock,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(ProductFilter::default().matches(&product("Laptop", "999.99", 10)));
    }

    #[test]
    fn name_matches_case_insensitive_substring() {
        let filter = ProductFilter {
            name: Some("lap".into()),
            ..Default::default()
        };
        assert!(filter.matches(&product("Laptop", "999.99", 10)));
        assert!(!filter.matches(&product("Mouse", "29.99", 50)));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let laptop = product("Laptop", "999.99", 10);
        let filter = ProductFilter {
            price_gte: Some("999.99".parse().unwrap()),
            price_lte: Some("999.99".parse().unwrap()),
            ..Default::default()
        };
        assert!(filter.matches(&laptop));

        let filter = ProductFilter {
            price_gte: Some("1000.00".parse().unwrap()),
            ..Default::default()
        };
        assert!(!filter.matches(&laptop));
    }

    #[test]
    fn stock_bounds_are_inclusive() {
        let mouse = product("Mouse", "29.99", 50);
        let filter = ProductFilter {
            stock_gte: Some(50),
            stock_lte: Some(50),
            ..Default::default()
        };
        assert!(filter.matches(&mouse));

        let filter = ProductFilter {
            stock_lte: Some(49),
            ..Default::default()
        };
        assert!(!filter.matches(&mouse));
    }
}
