//! Waitlist Service
//!
//! Orchestrates normalization, validation, duplicate lookup and insertion
//! against the injected store.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::domain::{normalize_email, EmailValidator, EnrollResult, NewWaitlistEntry};
use crate::error::StoreError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{WaitlistApi, WaitlistStore};

/// Waitlist Service implementation
///
/// Implements the `WaitlistApi` port using an injected store.
///
/// The duplicate check and the insert are two separate store calls. Two
/// sessions enrolling the same address concurrently can both pass the check
/// unless the store rejects the second insert itself.
pub struct WaitlistService<S: WaitlistStore> {
    /// Waitlist store (driven port)
    store: Arc<S>,
    /// Outcome counters and store latencies
    metrics: Arc<dyn MetricsRecorder>,
}

impl<S: WaitlistStore> WaitlistService<S> {
    /// Create a new service backed by `store`, without metrics
    pub fn new(store: Arc<S>) -> Self {
        Self::with_metrics(store, Arc::new(NoOpMetrics))
    }

    /// Create a new service reporting to `metrics`
    pub fn with_metrics(store: Arc<S>, metrics: Arc<dyn MetricsRecorder>) -> Self {
        Self { store, metrics }
    }

    /// The backing store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    async fn run(&self, raw_email: &str) -> EnrollResult {
        let email = normalize_email(raw_email);
        debug!(email = %email, "Enrollment requested");

        if !EmailValidator::is_valid(&email) {
            debug!(email = %email, "Rejected malformed email");
            return EnrollResult::Invalid;
        }

        let started = Instant::now();
        let existing = self.store.find_by_email(&email).await;
        self.metrics.record_query(started.elapsed());

        match existing {
            Ok(existing) if !existing.is_empty() => {
                debug!(email = %email, matches = existing.len(), "Email already on waitlist");
                return EnrollResult::AlreadyEnrolled;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(email = %email, error = %e, "Duplicate check failed");
                return EnrollResult::StoreFailure;
            }
        }

        let started = Instant::now();
        let inserted = self
            .store
            .insert(NewWaitlistEntry::server_timestamped(email.clone()))
            .await;
        self.metrics.record_insert(started.elapsed());

        match inserted {
            Ok(entry) => {
                info!(email = %entry.email, entry_id = %entry.id, "Enrolled on waitlist");
                EnrollResult::Enrolled
            }
            Err(StoreError::DuplicateEmail(_)) => {
                debug!(email = %email, "Store rejected duplicate insert");
                EnrollResult::AlreadyEnrolled
            }
            Err(e) => {
                warn!(email = %email, error = %e, "Waitlist insert failed");
                EnrollResult::StoreFailure
            }
        }
    }
}

impl<S: WaitlistStore> Clone for WaitlistService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

#[async_trait]
impl<S: WaitlistStore + 'static> WaitlistApi for WaitlistService<S> {
    async fn enroll(&self, raw_email: &str) -> EnrollResult {
        let result = self.run(raw_email).await;
        self.metrics.record_outcome(result);
        result
    }
}
