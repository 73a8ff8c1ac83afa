//! Gateway domain: configuration, errors, and wire types.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ConfigError, CorsConfig, GatewayConfig, HttpConfig, LimitsConfig};
pub use error::GatewayError;
pub use types::{status_for, EnrollRequest, EnrollmentResponse};
