//! Service Layer
//!
//! Application services that orchestrate domain logic and coordinate with
//! the store via ports.

pub mod waitlist_service;

pub use waitlist_service::WaitlistService;
