//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for the controller and other callers
//! - Driven Ports (outbound) - The waitlist document store

pub mod inbound;
pub mod outbound;

pub use inbound::WaitlistApi;
pub use outbound::WaitlistStore;
