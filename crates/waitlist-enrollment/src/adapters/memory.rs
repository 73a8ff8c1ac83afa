//! In-memory `WaitlistStore` adapter

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{NewWaitlistEntry, WaitlistEntry};
use crate::error::StoreError;
use crate::ports::WaitlistStore;

/// In-memory waitlist store for development and tests.
///
/// Like the document store it stands in for, it does not enforce unique
/// emails unless built with [`InMemoryWaitlistStore::with_unique_emails`].
#[derive(Default)]
pub struct InMemoryWaitlistStore {
    entries: RwLock<Vec<WaitlistEntry>>,
    unique_emails: bool,
}

impl InMemoryWaitlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject inserts whose email is already stored.
    pub fn with_unique_emails() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            unique_emails: true,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// All stored entries in insertion order.
    pub async fn entries(&self) -> Vec<WaitlistEntry> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl WaitlistStore for InMemoryWaitlistStore {
    async fn find_by_email(&self, email: &str) -> Result<Vec<WaitlistEntry>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().filter(|e| e.email == email).cloned().collect())
    }

    async fn insert(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, StoreError> {
        let mut entries = self.entries.write().await;

        if self.unique_emails && entries.iter().any(|e| e.email == entry.email) {
            return Err(StoreError::DuplicateEmail(entry.email));
        }

        let entry = entry.into_entry();
        entries.push(entry.clone());
        Ok(entry)
    }
}
