//! # Service Container
//!
//! Builds the configured `WaitlistStore`, wraps it in the
//! `WaitlistService` and exposes it as `dyn WaitlistApi` for the gateway.
//! The service reports to one shared `Metrics` collector.

use std::sync::Arc;

use tracing::{info, warn};
use waitlist_enrollment::{
    FileBackedWaitlistStore, InMemoryWaitlistStore, Metrics, StoreError, WaitlistApi,
    WaitlistService,
};

use crate::container::config::{StoreConfig, StoreKind};

/// Holds the wired enrollment service.
pub struct ServiceContainer {
    api: Arc<dyn WaitlistApi>,
    metrics: Arc<Metrics>,
    store_kind: StoreKind,
}

impl ServiceContainer {
    /// Open the store and wire the service.
    pub async fn build(config: &StoreConfig) -> Result<Self, StoreError> {
        let metrics = Arc::new(Metrics::new());
        let api: Arc<dyn WaitlistApi> = match config.kind {
            StoreKind::Memory => {
                let store = if config.unique_emails {
                    InMemoryWaitlistStore::with_unique_emails()
                } else {
                    InMemoryWaitlistStore::new()
                };
                info!(unique_emails = config.unique_emails, "Using in-memory store");
                Arc::new(WaitlistService::with_metrics(Arc::new(store), metrics.clone()))
            }
            StoreKind::File => {
                if config.unique_emails {
                    warn!("WL_UNIQUE_EMAILS only applies to the in-memory store");
                }
                let store = FileBackedWaitlistStore::open(&config.path).await?;
                info!(
                    path = %store.path().display(),
                    entries = store.len().await,
                    "Using file store"
                );
                Arc::new(WaitlistService::with_metrics(Arc::new(store), metrics.clone()))
            }
        };

        Ok(Self {
            api,
            metrics,
            store_kind: config.kind,
        })
    }

    /// The enrollment service behind its inbound port.
    pub fn api(&self) -> Arc<dyn WaitlistApi> {
        Arc::clone(&self.api)
    }

    /// Collector shared by the service and the `/metrics` route.
    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    pub fn store_kind(&self) -> StoreKind {
        self.store_kind
    }
}
