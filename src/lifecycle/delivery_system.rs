use crate::clients::DeliveryClient;
use crate::config::{ConfigError, DeliveryConfig};
use crate::delivery::{self, Delivery};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runtime orchestrator for the delivery service.
///
/// `DeliverySystem` is responsible for:
/// - **Startup**: Spawning the Delivery actor from a validated [`DeliveryConfig`]
/// - **Access**: Exposing the [`DeliveryClient`] used to talk to it
/// - **Shutdown**: Closing the mailbox and recovering the final state
pub struct DeliverySystem {
    /// Client for interacting with the Delivery actor
    pub client: DeliveryClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: JoinHandle<Delivery>,
}

impl Default for DeliverySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliverySystem {
    /// Starts a system with the default configuration.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        Self::start(&DeliveryConfig::default())
    }

    /// Starts a system after validating `config`.
    pub fn with_config(config: DeliveryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(&config))
    }

    fn start(config: &DeliveryConfig) -> Self {
        let (actor, client) = delivery::new(config);
        let handle = tokio::spawn(actor.run());
        info!(
            mailbox_capacity = config.mailbox_capacity,
            opening_hour = config.opening_hour,
            closing_hour = config.closing_hour,
            "Delivery system started"
        );
        Self { client, handle }
    }

    /// Gracefully shuts the system down and returns the final state.
    ///
    /// # Returns
    ///
    /// - `Ok(Delivery)` once the actor has drained its mailbox
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<Delivery, String> {
        info!("Shutting down system...");

        // Dropping the client closes the channel once no clones remain.
        drop(self.client);

        match self.handle.await {
            Ok(state) => {
                info!(
                    restaurants = state.restaurants().count(),
                    orders = state.orders().count(),
                    pending = state.pending_order_count(),
                    "System shutdown complete."
                );
                Ok(state)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(format!("Actor task failed: {:?}", e))
            }
        }
    }
}
