//! Outbound Ports (Driven Ports)
//!
//! What the subsystem needs from the document store holding the waitlist.

use async_trait::async_trait;

use crate::domain::{NewWaitlistEntry, WaitlistEntry};
use crate::error::StoreError;

/// Persistent waitlist store (Driven Port)
///
/// Only a query and an insert are required. The store is not assumed to
/// enforce unique emails; one that does reports the violation as
/// [`StoreError::DuplicateEmail`].
#[async_trait]
pub trait WaitlistStore: Send + Sync {
    /// All entries whose `email` equals `email` exactly
    async fn find_by_email(&self, email: &str) -> Result<Vec<WaitlistEntry>, StoreError>;

    /// Persist a new entry, assigning `created_at` if the record left it unset
    async fn insert(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, StoreError>;
}
