//! # Service Container
//!
//! Configuration loading and dependency wiring for the runtime.

pub mod config;
pub mod services;

pub use config::{RuntimeConfig, RuntimeConfigError, StoreConfig, StoreKind};
pub use services::ServiceContainer;
