use crate::api::ApiState;
use crate::catalog::Catalog;
use crate::clients::{LoyaltyClient, OrderClient};
use crate::seed::SeedData;
use crate::{loyalty_actor, order_actor};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the coffee-shop order management system.
///
/// `CafeSystem` is responsible for:
/// - **Startup**: building the catalog and both ledgers from the seed data
/// - **Dependency wiring**: the order ledger validates against the catalog,
///   so the catalog is injected as that actor's context
/// - **Lifecycle**: each ledger runs on its own task; shutdown drains them
///
/// # Architecture
///
/// - **Catalog**: immutable reference data, shared as an `Arc` (no actor)
/// - **Order ledger**: place / partial update / search
/// - **Loyalty ledger**: register / balance read / balance overwrite
///
/// # Example
///
/// ```ignore
/// let system = CafeSystem::new(SeedData::demo());
///
/// let order = system.orders.place(draft).await?;
/// let balance = system.loyalty.balance_of(number).await?;
///
/// system.shutdown().await?;
/// ```
///
/// Every test that wants isolated state constructs its own `CafeSystem`
/// from its own seed.
pub struct CafeSystem {
    /// The menu and its descriptions, shared with the order ledger.
    pub catalog: Arc<Catalog>,

    /// Client for the order ledger.
    pub orders: OrderClient,

    /// Client for the loyalty ledger.
    pub loyalty: LoyaltyClient,

    /// Task handles for the running ledger actors (used for shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    /// Builds the catalog, seeds both ledgers, and spawns their actors.
    pub fn new(seed: SeedData) -> Self {
        let catalog = Arc::new(Catalog::new(seed.menu_items, seed.menu_item_description_map));

        // 1. Create the ledgers (no dependencies yet)
        let (order_actor, order_client) = order_actor::new(seed.orders);
        let (loyalty_actor, loyalty_client) = loyalty_actor::new(seed.loyalty_accounts);

        // 2. Start them with their context injected
        let loyalty_handle = tokio::spawn(loyalty_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(catalog.clone()));

        Self {
            catalog,
            orders: OrderClient::new(order_client),
            loyalty: LoyaltyClient::new(loyalty_client),
            handles: vec![loyalty_handle, order_handle],
        }
    }

    /// The state handed to the HTTP gateway: the catalog plus a clone of
    /// each ledger client.
    pub fn api_state(&self) -> ApiState {
        ApiState {
            catalog: self.catalog.clone(),
            orders: self.orders.clone(),
            loyalty: self.loyalty.clone(),
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes their channels; each ledger actor drains
    /// its queue, logs its final state, and exits. Any panicked actor task
    /// surfaces here as an error.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.orders);
        drop(self.loyalty);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Ledger task failed: {:?}", e);
                return Err(format!("Ledger task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
