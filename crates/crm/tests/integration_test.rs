use crm::customer_actor::CustomerError;
use crm::filters::{CustomerFilter, OrderFilter, ProductFilter};
use crm::lifecycle::CrmSystem;
use crm::model::{CustomerId, CustomerInput, OrderInput, ProductId, ProductInput};
use crm::order_actor::OrderError;
use crm::product_actor::ProductError;
use crm::seed::seed;
use record_store::RecordClient;
use rust_decimal::Decimal;

/// Full end-to-end integration test with all real actors.
/// This tests the entire system working together.
#[tokio::test]
async fn test_full_crm_system_integration() {
    // Create the full system with all real actors
    let system = CrmSystem::new();

    // Create a customer
    let customer_params = CustomerInput {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        phone: Some("+1234567890".to_string()),
    };
    let payload = system
        .customer_client
        .create_customer(customer_params)
        .await
        .expect("Failed to create customer");
    assert_eq!(payload.message, "Customer created successfully");
    let alice = payload.customer;

    // Verify the customer was stored
    let retrieved = system
        .customer_client
        .get(alice.id.clone())
        .await
        .expect("Failed to get customer")
        .expect("Customer not found");
    assert_eq!(retrieved.name, "Alice");
    assert_eq!(retrieved.email, "alice@example.com");

    // Reusing the email is rejected with the canonical message
    let duplicate = system
        .customer_client
        .create_customer(CustomerInput {
            name: "Alice Again".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
        })
        .await;
    let err = duplicate.expect_err("Duplicate email should be rejected");
    assert_eq!(err, CustomerError::EmailExists);
    assert_eq!(err.to_string(), "Email already exists");

    // A malformed phone is rejected before anything reaches the store
    let bad_phone = system
        .customer_client
        .create_customer(CustomerInput {
            name: "Mallory".to_string(),
            email: "mallory@example.com".to_string(),
            phone: Some("12345".to_string()),
        })
        .await;
    let err = bad_phone.expect_err("Malformed phone should be rejected");
    assert_eq!(err, CustomerError::PhoneFormat);
    assert_eq!(
        err.to_string(),
        "Phone must be in format +1234567890 or 123-456-7890"
    );

    // Create two products
    let laptop = system
        .product_client
        .create_product(ProductInput {
            name: "Laptop".to_string(),
            price: "999.99".parse().unwrap(),
            stock: Some(10),
        })
        .await
        .expect("Failed to create product");
    let mouse = system
        .product_client
        .create_product(ProductInput {
            name: "Mouse".to_string(),
            price: "29.99".parse().unwrap(),
            stock: Some(50),
        })
        .await
        .expect("Failed to create product");

    // Create an order holding both products plus one id that does not exist
    let order = system
        .order_client
        .create_order(OrderInput {
            customer_id: alice.id.clone(),
            product_ids: vec![laptop.id.clone(), mouse.id.clone(), ProductId(999)],
            order_date: None,
        })
        .await
        .expect("Failed to create order");

    // The unknown id was dropped and the total derived from the survivors
    assert_eq!(order.customer_id, alice.id);
    assert_eq!(order.product_ids, vec![laptop.id.clone(), mouse.id.clone()]);
    assert_eq!(order.total_amount, "1029.98".parse::<Decimal>().unwrap());

    // Verify the order round-trips through the store
    let retrieved_order = system
        .order_client
        .get(order.id.clone())
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(retrieved_order.total_amount, order.total_amount);
    assert_eq!(retrieved_order.product_ids, order.product_ids);

    // Graceful shutdown
    system.shutdown().await.expect("Failed to shutdown system");
}

/// Bulk creation applies per-item validation and reports failures as strings.
#[tokio::test]
async fn test_bulk_create_reports_item_errors() {
    let system = CrmSystem::new();

    // Occupy an email so one bulk input collides with it
    system
        .customer_client
        .create_customer(CustomerInput {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: None,
        })
        .await
        .expect("Failed to create customer");

    let report = system
        .customer_client
        .bulk_create_customers(vec![
            CustomerInput {
                name: "Carol".to_string(),
                email: "carol@example.com".to_string(),
                phone: Some("555-123-4567".to_string()),
            },
            CustomerInput {
                name: "Bob Again".to_string(),
                email: "bob@example.com".to_string(),
                phone: None,
            },
            CustomerInput {
                name: "Mallory".to_string(),
                email: "mallory@example.com".to_string(),
                phone: Some("12345".to_string()),
            },
        ])
        .await
        .expect("Bulk create failed");

    // One success and two rejections, reported in input order
    assert_eq!(report.customers.len(), 1);
    assert_eq!(report.customers[0].name, "Carol");
    assert_eq!(
        report.errors,
        vec![
            "Email bob@example.com already exists".to_string(),
            "Invalid phone format for Mallory".to_string(),
        ]
    );

    // The batch success is stored alongside the earlier record
    let all = system.customer_client.list().await.unwrap();
    assert_eq!(all.len(), 2);

    system.shutdown().await.unwrap();
}

/// Product validation enforces the price floor and the stock default.
#[tokio::test]
async fn test_product_validation_and_stock_default() {
    let system = CrmSystem::new();

    let free = system
        .product_client
        .create_product(ProductInput {
            name: "Free Sample".to_string(),
            price: Decimal::ZERO,
            stock: Some(1),
        })
        .await;
    let err = free.expect_err("Zero price should be rejected");
    assert_eq!(err, ProductError::InvalidPrice);
    assert_eq!(err.to_string(), "Price must be positive");

    let negative = system
        .product_client
        .create_product(ProductInput {
            name: "Phantom".to_string(),
            price: "5.00".parse().unwrap(),
            stock: Some(-3),
        })
        .await;
    let err = negative.expect_err("Negative stock should be rejected");
    assert_eq!(err, ProductError::InvalidStock);
    assert_eq!(err.to_string(), "Stock cannot be negative");

    // Omitted stock defaults to zero
    let pencil = system
        .product_client
        .create_product(ProductInput {
            name: "Pencil".to_string(),
            price: "0.99".parse().unwrap(),
            stock: None,
        })
        .await
        .expect("Failed to create product");
    assert_eq!(pencil.stock, 0);

    // Rejected drafts consumed no ids
    assert_eq!(pencil.id, ProductId(1));

    system.shutdown().await.unwrap();
}

/// Order creation validates the customer and requires at least one real product.
#[tokio::test]
async fn test_order_validation_failures() {
    let system = CrmSystem::new();

    let customer = system
        .customer_client
        .create_customer(CustomerInput {
            name: "Dave".to_string(),
            email: "dave@example.com".to_string(),
            phone: None,
        })
        .await
        .unwrap()
        .customer;
    let product = system
        .product_client
        .create_product(ProductInput {
            name: "Cable".to_string(),
            price: "9.99".parse().unwrap(),
            stock: None,
        })
        .await
        .unwrap();

    // Unknown customer id
    let bad_customer = system
        .order_client
        .create_order(OrderInput {
            customer_id: CustomerId(42),
            product_ids: vec![product.id.clone()],
            order_date: None,
        })
        .await;
    let err = bad_customer.expect_err("Unknown customer should be rejected");
    assert_eq!(err, OrderError::InvalidCustomer);
    assert_eq!(err.to_string(), "Invalid customer ID");

    // Every referenced product is unknown
    let no_products = system
        .order_client
        .create_order(OrderInput {
            customer_id: customer.id.clone(),
            product_ids: vec![ProductId(404), ProductId(405)],
            order_date: None,
        })
        .await;
    let err = no_products.expect_err("Empty resolved product list should be rejected");
    assert_eq!(err, OrderError::NoValidProducts);
    assert_eq!(err.to_string(), "No valid products selected");

    // Neither attempt left a record behind
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

/// Filter scans across the seeded dataset.
#[tokio::test]
async fn test_filter_scans_across_collections() {
    let system = CrmSystem::new();
    seed(&system).await.expect("Seeding failed");

    // Name matching is case-insensitive substring
    let named = system
        .customer_client
        .filter_customers(CustomerFilter {
            name: Some("ali".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(named.len(), 1);
    assert_eq!(named[0].name, "Alice");

    // An empty filter matches everything
    let everyone = system
        .customer_client
        .filter_customers(CustomerFilter::default())
        .await
        .unwrap();
    assert_eq!(everyone.len(), 2);

    // The +1 pattern keeps only customers with a +1 phone
    let us_phones = system
        .customer_client
        .filter_customers(CustomerFilter {
            phone_pattern: Some("+1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(us_phones.len(), 1);
    assert_eq!(us_phones[0].name, "Alice");

    // Price bounds are inclusive on both ends
    let priced = system
        .product_client
        .filter_products(ProductFilter {
            price_gte: Some("29.99".parse().unwrap()),
            price_lte: Some("999.99".parse().unwrap()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(priced.len(), 2);

    let cheap = system
        .product_client
        .filter_products(ProductFilter {
            price_lte: Some("100".parse().unwrap()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(cheap.len(), 1);
    assert_eq!(cheap[0].name, "Mouse");

    // Order filters resolve related names through the sibling stores
    let by_customer = system
        .order_client
        .filter_orders(OrderFilter {
            customer_name: Some("alice".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_customer.len(), 1);

    let by_product = system
        .order_client
        .filter_orders(OrderFilter {
            product_name: Some("laptop".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_product.len(), 1);

    // A fragment matching several products in one order returns that order once
    let both_products = system
        .order_client
        .filter_orders(OrderFilter {
            product_name: Some("o".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(both_products.len(), 1);
    assert_eq!(both_products[0].product_ids.len(), 2);

    // A name that resolves to no customers matches no orders
    let nobody = system
        .order_client
        .filter_orders(OrderFilter {
            customer_name: Some("zelda".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(nobody.is_empty());

    // An exact product id works without a name scan
    let laptops = system
        .product_client
        .filter_products(ProductFilter {
            name: Some("Laptop".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let by_id = system
        .order_client
        .filter_orders(OrderFilter {
            product_id: Some(laptops[0].id.clone()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_id.len(), 1);

    system.shutdown().await.unwrap();
}

/// Two simultaneous creates for one email leave exactly one record.
#[tokio::test]
async fn test_concurrent_duplicate_creates() {
    let system = CrmSystem::new();

    let input = || CustomerInput {
        name: "Eve".to_string(),
        email: "eve@example.com".to_string(),
        phone: None,
    };
    let (a, b) = tokio::join!(
        system.customer_client.create_customer(input()),
        system.customer_client.create_customer(input()),
    );

    // Exactly one call wins regardless of interleaving: the store's own
    // admission check backstops the client-side lookup
    let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "Expected exactly one successful create");

    let losers: Vec<&CustomerError> = [&a, &b]
        .into_iter()
        .filter_map(|r| r.as_ref().err())
        .collect();
    assert!(matches!(
        losers[0],
        CustomerError::EmailExists | CustomerError::DuplicateEmail(_)
    ));

    assert_eq!(system.customer_client.list().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}
