//! # Runtime Configuration
//!
//! Unified configuration for telemetry, the HTTP gateway and the store,
//! loaded from `WL_*` environment variables.

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use thiserror::Error;
use waitlist_gateway::{ConfigError as GatewayConfigError, GatewayConfig};
use waitlist_telemetry::TelemetryConfig;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Logging configuration.
    pub telemetry: TelemetryConfig,
    /// HTTP gateway configuration.
    pub gateway: GatewayConfig,
    /// Storage configuration.
    pub store: StoreConfig,
}

/// Which `WaitlistStore` backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Memory,
    File,
}

/// Storage configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backend selection.
    pub kind: StoreKind,
    /// JSON Lines file for [`StoreKind::File`].
    pub path: PathBuf,
    /// Reject duplicate emails inside the in-memory store.
    pub unique_emails: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::Memory,
            path: PathBuf::from("data/waitlist.jsonl"),
            unique_emails: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum RuntimeConfigError {
    #[error("{var} has invalid value {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error(transparent)]
    Gateway(#[from] GatewayConfigError),
}

impl RuntimeConfig {
    /// Load configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `WL_HTTP_HOST` | `0.0.0.0` |
    /// | `WL_HTTP_PORT` | `8080` |
    /// | `WL_CORS_ORIGINS` | any origin |
    /// | `WL_STORE` | `memory` |
    /// | `WL_STORE_PATH` | `data/waitlist.jsonl` |
    /// | `WL_UNIQUE_EMAILS` | `false` |
    ///
    /// Telemetry variables are read by [`TelemetryConfig::from_lookup`].
    pub fn from_env() -> Result<Self, RuntimeConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RuntimeConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            telemetry: TelemetryConfig::from_lookup(&lookup),
            ..Self::default()
        };

        if let Some(host) = lookup("WL_HTTP_HOST") {
            config.gateway.http.host = parse_var::<IpAddr>("WL_HTTP_HOST", host)?;
        }
        if let Some(port) = lookup("WL_HTTP_PORT") {
            config.gateway.http.port = parse_var("WL_HTTP_PORT", port)?;
        }
        if let Some(origins) = lookup("WL_CORS_ORIGINS") {
            config.gateway.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(kind) = lookup("WL_STORE") {
            config.store.kind = match kind.to_lowercase().as_str() {
                "memory" => StoreKind::Memory,
                "file" => StoreKind::File,
                _ => {
                    return Err(RuntimeConfigError::InvalidValue {
                        var: "WL_STORE",
                        value: kind,
                    })
                }
            };
        }
        if let Some(path) = lookup("WL_STORE_PATH") {
            config.store.path = PathBuf::from(path);
        }
        if let Some(flag) = lookup("WL_UNIQUE_EMAILS") {
            config.store.unique_emails = parse_flag("WL_UNIQUE_EMAILS", flag)?;
        }

        config.gateway.validate()?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    value: String,
) -> Result<T, RuntimeConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| RuntimeConfigError::InvalidValue { var, value })
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, RuntimeConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(RuntimeConfigError::InvalidValue { var, value }),
    }
}
