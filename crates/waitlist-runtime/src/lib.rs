//! # Waitlist Runtime
//!
//! Wires the waitlist service together and runs it.
//!
//! ## Modular Structure
//!
//! - `container/` - Environment configuration and service wiring
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from `WL_*` variables
//! 2. Initialize telemetry
//! 3. Open the configured store
//! 4. Wrap it in the enrollment service and hand it to the gateway
//! 5. Serve until shutdown is signalled

pub mod container;

use std::future::Future;

use thiserror::Error;
use tracing::info;
use waitlist_enrollment::StoreError;
use waitlist_gateway::{GatewayError, WaitlistGateway};

use crate::container::{RuntimeConfig, ServiceContainer};

/// Startup and serving failures.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Failed to open waitlist store: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// The wired service with its HTTP gateway.
pub struct WaitlistRuntime {
    container: ServiceContainer,
    gateway: WaitlistGateway,
}

impl WaitlistRuntime {
    /// Open the store and build the gateway.
    pub async fn new(config: RuntimeConfig) -> Result<Self, RuntimeError> {
        info!(store = ?config.store.kind, "Creating waitlist runtime");

        let container = ServiceContainer::build(&config.store).await?;
        let gateway = WaitlistGateway::new(config.gateway, container.api(), container.metrics())?;

        Ok(Self { container, gateway })
    }

    pub fn container(&self) -> &ServiceContainer {
        &self.container
    }

    pub fn gateway(&self) -> &WaitlistGateway {
        &self.gateway
    }

    /// Serve HTTP until `shutdown` resolves.
    pub async fn run<F>(&self, shutdown: F) -> Result<(), RuntimeError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.gateway.start(shutdown).await?;
        info!("Shutdown complete");
        Ok(())
    }
}
