//! Inbound Ports (Driving Ports)
//!
//! The API the controller (or any other caller) uses to enroll an address.

use async_trait::async_trait;

use crate::domain::EnrollResult;

/// Primary waitlist API (Driving Port)
#[async_trait]
pub trait WaitlistApi: Send + Sync {
    /// Enroll a raw, user-typed address
    ///
    /// Normalizes, validates, checks for an existing entry and inserts.
    /// Issues at most one query and at most one insert. Never retries.
    async fn enroll(&self, raw_email: &str) -> EnrollResult;
}
