//! Error types for the waitlist subsystem

use thiserror::Error;

/// Errors reported by a [`crate::ports::WaitlistStore`]
///
/// The service folds every variant except `DuplicateEmail` into
/// `EnrollResult::StoreFailure`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Rejected by a store that enforces unique emails natively
    #[error("Duplicate email: {0}")]
    DuplicateEmail(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
