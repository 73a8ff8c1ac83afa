//! Gateway service - binds the HTTP listener and serves the router.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::router::build_router;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use waitlist_enrollment::{Metrics, WaitlistApi};

/// HTTP gateway in front of the enrollment service
pub struct WaitlistGateway {
    config: GatewayConfig,
    api: Arc<dyn WaitlistApi>,
    metrics: Arc<Metrics>,
}

impl WaitlistGateway {
    /// Create a gateway; fails on invalid configuration
    pub fn new(
        config: GatewayConfig,
        api: Arc<dyn WaitlistApi>,
        metrics: Arc<Metrics>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;
        Ok(Self {
            config,
            api,
            metrics,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Router with middleware applied
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.api), Arc::clone(&self.metrics), &self.config)
    }

    /// Bind the configured address and serve until `shutdown` resolves
    pub async fn start<F>(&self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| GatewayError::Bind { addr, source })?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local: Option<SocketAddr> = listener.local_addr().ok();
        info!(addr = ?local, "Starting HTTP server");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(GatewayError::Serve)?;

        info!("HTTP server stopped");
        Ok(())
    }
}
