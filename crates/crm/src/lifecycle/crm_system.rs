use crate::clients::{CustomerClient, OrderClient, ProductClient};
use tracing::{error, info};

/// The main runtime orchestrator for the actor-based CRM backend.
///
/// `CrmSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all store actors
/// - **Dependency Wiring**: Connecting stores that depend on each other
///   (the Order actor needs the Customer and Product clients)
///
/// # Architecture
///
/// The system consists of three store actors:
/// - **Customer Actor**: Manages customers and enforces email uniqueness
/// - **Product Actor**: Manages the product catalog
/// - **Order Actor**: Manages orders and coordinates with the other two
///
/// # Example
///
/// ```ignore
/// let system = CrmSystem::new();
///
/// let payload = system.customer_client.create_customer(customer_input).await?;
/// let product = system.product_client.create_product(product_input).await?;
/// let order = system.order_client.create_order(order_input).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CrmSystem {
    /// Client for interacting with the Customer actor
    pub customer_client: CustomerClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CrmSystem {
    /// Creates and initializes a new `CrmSystem` with all actors running.
    ///
    /// This method:
    /// 1. Creates the Customer, Product, and Order store actors
    /// 2. Wires up dependencies (the Order actor receives the Customer and
    ///    Product clients as its context)
    /// 3. Spawns each actor in its own Tokio task
    pub fn new() -> Self {
        // 1. Create actors (no dependencies)
        let (customer_actor, customer_client) = crate::customer_actor::new();
        let (product_actor, product_client) = crate::product_actor::new();
        let (order_actor, order_client) =
            crate::order_actor::new(customer_client.clone(), product_client.clone());

        // 2. Start actors with injected context
        // Customer and Product have no dependencies (Context = ())
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));

        // Order actor needs the sibling clients (Context = (CustomerClient, ProductClient))
        let order_handle = tokio::spawn(
            order_actor.run((customer_client.clone(), product_client.clone())),
        );

        Self {
            customer_client,
            product_client,
            order_client,
            handles: vec![customer_handle, product_handle, order_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops all clients, which closes the request channels, then waits for
    /// every actor task to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // When the clients drop, their channel senders drop with them and
        // each actor's receiver returns None, ending its run loop. The
        // Order actor goes first; its context then releases the Customer
        // and Product clients it holds.
        drop(self.order_client);
        drop(self.customer_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
