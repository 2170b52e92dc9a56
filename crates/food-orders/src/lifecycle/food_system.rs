use crate::clients::{OrderClient, ScheduleClient};
use crate::config::{ConfigError, SystemConfig};
use tracing::{error, info};

/// Runtime owner of the order and schedule stores.
///
/// # Example
///
/// ```ignore
/// let system = FoodSystem::new(&SystemConfig::default())?;
///
/// let order = system.order_client.create_order(params).await?;
/// let schedule = system.schedule_client.schedule((&order).into()).await?;
///
/// system.shutdown().await?;
/// ```
pub struct FoodSystem {
    /// Client for the orders service
    pub order_client: OrderClient,

    /// Client for the kitchen service
    pub schedule_client: ScheduleClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl FoodSystem {
    /// Creates both stores and spawns them on the current Tokio runtime.
    ///
    /// Fails with [`ConfigError::ZeroBuffer`] before anything is spawned if a
    /// channel capacity is zero.
    pub fn new(config: &SystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (order_actor, order_client) = crate::order_actor::new(config.order_buffer);
        let (schedule_actor, schedule_client) =
            crate::schedule_actor::new(config.schedule_buffer);

        let order_handle = tokio::spawn(order_actor.run());
        let schedule_handle = tokio::spawn(schedule_actor.run());

        info!(
            order_buffer = config.order_buffer,
            schedule_buffer = config.schedule_buffer,
            "Food system started"
        );

        Ok(Self {
            order_client,
            schedule_client,
            handles: vec![order_handle, schedule_handle],
        })
    }

    /// Drops the clients and waits for both stores to stop.
    ///
    /// Returns `Err` if a store task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.schedule_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
