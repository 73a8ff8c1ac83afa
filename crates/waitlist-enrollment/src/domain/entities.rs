//! Waitlist entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted waitlist record
///
/// Created exactly once per enrollment and never mutated by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    /// Store-assigned document identifier
    pub id: Uuid,
    /// Normalized (trimmed, lower-cased) address
    pub email: String,
    /// Store-assigned enrollment timestamp
    pub created_at: DateTime<Utc>,
}

/// Insert record handed to a [`crate::ports::WaitlistStore`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    /// Normalized address
    pub email: String,
    /// `None` asks the store to assign the timestamp at write time
    pub created_at: Option<DateTime<Utc>>,
}

impl NewWaitlistEntry {
    /// Insert record whose timestamp is assigned by the store.
    pub fn server_timestamped(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            created_at: None,
        }
    }

    /// Materialize the record as a stored entry.
    ///
    /// Adapters call this at write time so `created_at` reflects the moment
    /// of persistence when the caller left it unset.
    pub fn into_entry(self) -> WaitlistEntry {
        WaitlistEntry {
            id: Uuid::new_v4(),
            email: self.email,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}
