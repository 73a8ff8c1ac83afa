//! # Waitlist Runtime
//!
//! Entry point for the waitlist HTTP service. See the library docs for the
//! startup sequence and `RuntimeConfig` for environment variables.

use anyhow::{Context, Result};
use waitlist_runtime::container::RuntimeConfig;
use waitlist_runtime::WaitlistRuntime;
use waitlist_telemetry::{init_telemetry, log_event};

#[tokio::main]
async fn main() -> Result<()> {
    let config = RuntimeConfig::from_env().context("Invalid configuration")?;

    let _telemetry =
        init_telemetry(config.telemetry.clone()).context("Failed to initialize telemetry")?;

    log_event!(
        info,
        "runtime",
        "Starting waitlist service",
        addr = %config.gateway.http_addr()
    );

    let runtime = WaitlistRuntime::new(config)
        .await
        .context("Failed to start waitlist runtime")?;

    log_event!(info, "runtime", "Waitlist service is running. Press Ctrl+C to stop.");

    runtime
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log_event!(error, "runtime", "Failed to listen for shutdown signal", error = %e);
                std::future::pending::<()>().await;
            }
            log_event!(info, "runtime", "Received shutdown signal");
        })
        .await
        .context("HTTP server failed")?;

    Ok(())
}
