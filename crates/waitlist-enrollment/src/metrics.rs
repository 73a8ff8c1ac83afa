//! Metrics hooks for enrollment
//!
//! Counts `enroll` outcomes and times the store calls behind them.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use waitlist_enrollment::metrics::Metrics;
//!
//! let metrics = Arc::new(Metrics::new());
//! let service = WaitlistService::with_metrics(store, metrics.clone());
//!
//! service.enroll("coach@example.com").await;
//! assert_eq!(metrics.snapshot().enrolled, 1);
//! ```

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::domain::EnrollResult;

/// Metrics collector for enrollment
///
/// Thread-safe counters shared by every session.
#[derive(Default)]
pub struct Metrics {
    /// `enroll` calls that inserted a new entry
    pub enrolled: AtomicU64,
    /// Calls that found the address already listed
    pub already_enrolled: AtomicU64,
    /// Calls rejected by the validator
    pub invalid: AtomicU64,
    /// Calls that ended in a store failure
    pub store_failures: AtomicU64,
    /// Duplicate-check queries issued
    pub store_queries: AtomicU64,
    /// Inserts issued
    pub store_inserts: AtomicU64,
    /// Cumulative query time in nanoseconds
    pub query_time_ns: AtomicU64,
    /// Cumulative insert time in nanoseconds
    pub insert_time_ns: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one `enroll` outcome
    pub fn record_outcome(&self, result: EnrollResult) {
        let counter = match result {
            EnrollResult::Enrolled => &self.enrolled,
            EnrollResult::AlreadyEnrolled => &self.already_enrolled,
            EnrollResult::Invalid => &self.invalid,
            EnrollResult::StoreFailure => &self.store_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a `find_by_email` call, successful or not
    pub fn record_query(&self, duration: Duration) {
        self.store_queries.fetch_add(1, Ordering::Relaxed);
        self.query_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Record an `insert` call, successful or not
    pub fn record_insert(&self, duration: Duration) {
        self.store_inserts.fetch_add(1, Ordering::Relaxed);
        self.insert_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            enrolled: self.enrolled.load(Ordering::Relaxed),
            already_enrolled: self.already_enrolled.load(Ordering::Relaxed),
            invalid: self.invalid.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
            store_queries: self.store_queries.load(Ordering::Relaxed),
            store_inserts: self.store_inserts.load(Ordering::Relaxed),
            avg_query_ns: self.avg_query_time_ns(),
            avg_insert_ns: self.avg_insert_time_ns(),
        }
    }

    pub fn avg_query_time_ns(&self) -> u64 {
        average(&self.query_time_ns, &self.store_queries)
    }

    pub fn avg_insert_time_ns(&self) -> u64 {
        average(&self.insert_time_ns, &self.store_inserts)
    }

    /// Reset all counters
    pub fn reset(&self) {
        for counter in [
            &self.enrolled,
            &self.already_enrolled,
            &self.invalid,
            &self.store_failures,
            &self.store_queries,
            &self.store_inserts,
            &self.query_time_ns,
            &self.insert_time_ns,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

fn average(total_ns: &AtomicU64, count: &AtomicU64) -> u64 {
    let count = count.load(Ordering::Relaxed);
    if count > 0 {
        total_ns.load(Ordering::Relaxed) / count
    } else {
        0
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub enrolled: u64,
    pub already_enrolled: u64,
    pub invalid: u64,
    pub store_failures: u64,
    pub store_queries: u64,
    pub store_inserts: u64,
    pub avg_query_ns: u64,
    pub avg_insert_ns: u64,
}

impl MetricsSnapshot {
    /// Total `enroll` calls observed
    pub fn total_requests(&self) -> u64 {
        self.enrolled + self.already_enrolled + self.invalid + self.store_failures
    }
}

/// Trait for custom metrics recording implementations
///
/// Implement this trait to forward enrollment metrics to an external system.
pub trait MetricsRecorder: Send + Sync {
    fn record_outcome(&self, result: EnrollResult);

    fn record_query(&self, duration: Duration);

    fn record_insert(&self, duration: Duration);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_outcome(&self, _: EnrollResult) {}
    fn record_query(&self, _: Duration) {}
    fn record_insert(&self, _: Duration) {}
}

impl MetricsRecorder for Metrics {
    fn record_outcome(&self, result: EnrollResult) {
        Metrics::record_outcome(self, result);
    }

    fn record_query(&self, duration: Duration) {
        Metrics::record_query(self, duration);
    }

    fn record_insert(&self, duration: Duration) {
        Metrics::record_insert(self, duration);
    }
}
