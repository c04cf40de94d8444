//! Idempotent demo dataset seeding.
//!
//! Builds the demo dataset exclusively through the regular mutation
//! operations: two customers, two products, and one order for Alice
//! containing every product. Each step first checks whether its record
//! already exists, so rerunning the seed leaves the collections unchanged.

use crate::customer_actor::CustomerError;
use crate::filters::{OrderFilter, ProductFilter};
use crate::lifecycle::CrmSystem;
use crate::model::{Customer, CustomerInput, OrderInput, ProductInput};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while seeding.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

/// Seeds the demo dataset. Safe to run more than once.
pub async fn seed(system: &CrmSystem) -> Result<(), SeedError> {
    let alice = seed_customer(system, "Alice", "alice@example.com", "+1234567890").await?;
    seed_customer(system, "Bob", "bob@example.com", "123-456-7890").await?;

    seed_product(system, "Laptop", Decimal::new(99999, 2), 10).await?;
    seed_product(system, "Mouse", Decimal::new(2999, 2), 50).await?;

    seed_order_for(system, alice).await?;

    info!("Database seeded successfully!");
    Ok(())
}

async fn seed_customer(
    system: &CrmSystem,
    name: &str,
    email: &str,
    phone: &str,
) -> Result<Customer, SeedError> {
    if let Some(existing) = system.customer_client.find_by_email(email).await? {
        debug!(email, "Customer already seeded");
        return Ok(existing);
    }
    let payload = system
        .customer_client
        .create_customer(CustomerInput {
            name: name.to_string(),
            email: email.to_string(),
            phone: Some(phone.to_string()),
        })
        .await?;
    Ok(payload.customer)
}

async fn seed_product(
    system: &CrmSystem,
    name: &str,
    price: Decimal,
    stock: i32,
) -> Result<(), SeedError> {
    let existing = system
        .product_client
        .filter_products(ProductFilter {
            name: Some(name.to_string()),
            ..Default::default()
        })
        .await?;
    if !existing.is_empty() {
        debug!(name, "Product already seeded");
        return Ok(());
    }
    system
        .product_client
        .create_product(ProductInput {
            name: name.to_string(),
            price,
            stock: Some(stock),
        })
        .await?;
    Ok(())
}

/// Places one order for the customer containing every seeded product.
async fn seed_order_for(system: &CrmSystem, customer: Customer) -> Result<(), SeedError> {
    let existing = system
        .order_client
        .filter_orders(OrderFilter {
            customer_name: Some(customer.name.clone()),
            ..Default::default()
        })
        .await?;
    if !existing.is_empty() {
        debug!(customer = %customer.id, "Order already seeded");
        return Ok(());
    }

    let products = system
        .product_client
        .filter_products(ProductFilter::default())
        .await?;
    system
        .order_client
        .create_order(OrderInput {
            customer_id: customer.id,
            product_ids: products.iter().map(|p| p.id.clone()).collect(),
            order_date: None,
        })
        .await?;
    Ok(())
}
