//! # Concurrent Sessions
//!
//! Two visitors submit the same address at once. The duplicate check and the
//! insert are separate store calls, so both sessions can pass the check. A
//! store that enforces uniqueness itself turns the losing insert into
//! `AlreadyEnrolled`.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use waitlist_enrollment::domain::invariant_unique_emails;
    use waitlist_enrollment::{
        EnrollmentController, EnrollmentPhase, FailureReason, InMemoryWaitlistStore,
        SubmitOutcome, WaitlistService,
    };

    use crate::integration::support::InstrumentedStore;

    async fn race(
        inner: InMemoryWaitlistStore,
    ) -> (
        SubmitOutcome,
        SubmitOutcome,
        Arc<InstrumentedStore<InMemoryWaitlistStore>>,
    ) {
        // Both sessions read before either writes
        let store = Arc::new(InstrumentedStore::new(inner).with_query_barrier(2));
        let service = Arc::new(WaitlistService::new(Arc::clone(&store)));

        let alice = EnrollmentController::new(Arc::clone(&service));
        let bob = EnrollmentController::new(Arc::clone(&service));

        let (a, b) = tokio::join!(
            alice.submit("coach@example.com"),
            bob.submit(" COACH@example.com")
        );
        (a, b, store)
    }

    #[tokio::test]
    async fn test_race_without_store_uniqueness_duplicates() {
        let (a, b, store) = race(InMemoryWaitlistStore::new()).await;

        assert_eq!(a, SubmitOutcome::Resolved(EnrollmentPhase::Succeeded));
        assert_eq!(b, SubmitOutcome::Resolved(EnrollmentPhase::Succeeded));

        let entries = store.inner().entries().await;
        assert_eq!(entries.len(), 2);
        assert!(!invariant_unique_emails(&entries));
    }

    #[tokio::test]
    async fn test_race_with_store_uniqueness_single_entry() {
        let (a, b, store) = race(InMemoryWaitlistStore::with_unique_emails()).await;

        let mut outcomes = vec![a, b];
        outcomes.sort_by_key(|o| matches!(o, SubmitOutcome::Resolved(EnrollmentPhase::Failed(_))));
        assert_eq!(
            outcomes,
            vec![
                SubmitOutcome::Resolved(EnrollmentPhase::Succeeded),
                SubmitOutcome::Resolved(EnrollmentPhase::Failed(FailureReason::AlreadyEnrolled)),
            ]
        );

        assert_eq!(store.insert_count(), 2);
        let entries = store.inner().entries().await;
        assert_eq!(entries.len(), 1);
        assert!(invariant_unique_emails(&entries));
    }

    #[tokio::test]
    async fn test_distinct_addresses_do_not_interfere() {
        let store = Arc::new(InstrumentedStore::new(InMemoryWaitlistStore::with_unique_emails()));
        let service = Arc::new(WaitlistService::new(Arc::clone(&store)));

        let sessions: Vec<_> = (0..8)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    let controller = EnrollmentController::new(service);
                    controller.submit(&format!("coach{i}@example.com")).await
                })
            })
            .collect();

        for session in sessions {
            assert_eq!(
                session.await.unwrap(),
                SubmitOutcome::Resolved(EnrollmentPhase::Succeeded)
            );
        }
        assert_eq!(store.inner().len().await, 8);
    }
}
