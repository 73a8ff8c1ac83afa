//! Store wrappers for observing and steering the enrollment flow.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Barrier, Notify};

use waitlist_enrollment::{NewWaitlistEntry, StoreError, WaitlistEntry, WaitlistStore};

/// Wraps a real store, counting calls and optionally injecting faults or
/// holding queries.
pub struct InstrumentedStore<S> {
    inner: S,
    queries: AtomicUsize,
    inserts: AtomicUsize,
    fail_queries: AtomicBool,
    /// Every query waits here after reading, so N sessions all observe the
    /// store before any of them writes
    query_barrier: Option<Barrier>,
    /// Queries block until notified
    query_gate: Option<Arc<Notify>>,
}

impl<S: WaitlistStore> InstrumentedStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            queries: AtomicUsize::new(0),
            inserts: AtomicUsize::new(0),
            fail_queries: AtomicBool::new(false),
            query_barrier: None,
            query_gate: None,
        }
    }

    pub fn with_query_barrier(mut self, sessions: usize) -> Self {
        self.query_barrier = Some(Barrier::new(sessions));
        self
    }

    pub fn with_query_gate(mut self, gate: Arc<Notify>) -> Self {
        self.query_gate = Some(gate);
        self
    }

    pub fn set_fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: WaitlistStore> WaitlistStore for InstrumentedStore<S> {
    async fn find_by_email(&self, email: &str) -> Result<Vec<WaitlistEntry>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.query_gate {
            gate.notified().await;
        }
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("connection reset".into()));
        }

        let result = self.inner.find_by_email(email).await;
        if let Some(barrier) = &self.query_barrier {
            barrier.wait().await;
        }
        result
    }

    async fn insert(&self, entry: NewWaitlistEntry) -> Result<WaitlistEntry, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(entry).await
    }
}
