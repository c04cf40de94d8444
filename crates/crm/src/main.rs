//! # CRM Record Service
//!
//! An actor-based CRM backend: customers, products, and orders each live in
//! their own record store, and every mutation or filter scan flows through a
//! typed client.
//!
//! ## 🚀 Core Components
//!
//! - **[record_store]**: The heart of the system. Contains the generic [`StoreActor`](record_store::StoreActor) and [`Record`](record_store::Record) trait.
//! - **[model](crm::model)**: Pure data structures ([`Customer`], [`Product`], [`Order`]) that implement the `Record` trait.
//! - **[filters](crm::filters)**: Typed filter criteria evaluated inside the store actors.
//! - **[clients](crm::clients)**: Type-safe wrappers (e.g., [`CustomerClient`](crm::clients::CustomerClient)) that hide the complexity of message passing.
//! - **[lifecycle](crm::lifecycle)**: Orchestration layer that manages the lifecycle of actors.
//!
//! ## 📚 Quick Start
//!
//! The application entry point is in [`main`], which demonstrates:
//! 1.  Booting the [`CrmSystem`](crm::lifecycle::CrmSystem).
//! 2.  Seeding the demo dataset.
//! 3.  Bulk-creating customers and placing an order.
//! 4.  Running filter scans over every collection.
//!
//! ## 🧪 Testing
//!
//! See [`record_store::mock`] for utilities to test clients without spawning full actors.

use crm::filters::{CustomerFilter, OrderFilter, ProductFilter};
use crm::lifecycle::CrmSystem;
use crm::model::{CustomerInput, OrderInput, ProductId};
use crm::seed::seed;
use record_store::tracing::setup_tracing;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting application with complete CRM system");

    // Create the entire CRM system (starts all store actors)
    let system = CrmSystem::new();

    // Seed the demo dataset
    let span = tracing::info_span!("seeding");
    async {
        info!("Seeding demo data");
        seed(&system).await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // Bulk create customers - one input reuses a seeded email, so the report
    // carries both a created record and an error message
    let bulk_params = vec![
        CustomerInput {
            name: "Carol".to_string(),
            email: "carol@example.com".to_string(),
            phone: Some("+15551234567".to_string()),
        },
        CustomerInput {
            name: "Alice Again".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
        },
    ];

    let span = tracing::info_span!("bulk_creation");
    let report = async {
        info!("Bulk creating customers");
        system
            .customer_client
            .bulk_create_customers(bulk_params)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        created = report.customers.len(),
        rejected = report.errors.len(),
        "Bulk creation finished"
    );
    for message in &report.errors {
        info!(%message, "Input rejected");
    }

    // Look up the seeded records the order will reference
    let alice = system
        .customer_client
        .find_by_email("alice@example.com")
        .await
        .map_err(|e| e.to_string())?
        .ok_or("Seeded customer missing")?;

    let laptops = system
        .product_client
        .filter_products(ProductFilter {
            name: Some("laptop".to_string()),
            ..Default::default()
        })
        .await
        .map_err(|e| e.to_string())?;

    // Create test order - one id is bogus and gets dropped during creation
    let mut product_ids: Vec<ProductId> = laptops.iter().map(|p| p.id.clone()).collect();
    product_ids.push(ProductId(99999));

    let order_params = OrderInput {
        customer_id: alice.id.clone(),
        product_ids,
        order_date: None,
    };

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        info!("Processing order through order system");
        system.order_client.create_order(order_params).await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order) => info!(
            order_id = %order.id,
            total = %order.total_amount,
            "Order processed successfully"
        ),
        Err(e) => {
            error!(error = %e, "Order processing failed")
        }
    }

    // Run filter scans over the collections
    let span = tracing::info_span!("filter_scans");
    async {
        let at_example = system
            .customer_client
            .filter_customers(CustomerFilter {
                email: Some("example.com".to_string()),
                ..Default::default()
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(count = at_example.len(), "Customers at example.com");

        let us_phones = system
            .customer_client
            .filter_customers(CustomerFilter {
                phone_pattern: Some("+1".to_string()),
                ..Default::default()
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(count = us_phones.len(), "Customers with +1 numbers");

        let alice_orders = system
            .order_client
            .filter_orders(OrderFilter {
                customer_name: Some("alice".to_string()),
                ..Default::default()
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(count = alice_orders.len(), "Orders placed by Alice");

        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
