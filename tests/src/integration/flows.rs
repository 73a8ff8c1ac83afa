//! # Enrollment Flows
//!
//! One page visit end to end: `EnrollmentController` → `WaitlistService` →
//! `InMemoryWaitlistStore`, with the store instrumented to observe calls.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tokio::sync::Notify;

    use waitlist_enrollment::{
        EnrollmentController, EnrollmentPhase, FailureReason, InMemoryWaitlistStore,
        NewWaitlistEntry, SubmitOutcome, WaitlistService, WaitlistStore, SUCCESS_MESSAGE,
    };

    use crate::integration::support::InstrumentedStore;

    type Store = InstrumentedStore<InMemoryWaitlistStore>;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn wire(store: Store) -> (EnrollmentController<WaitlistService<Store>>, Arc<Store>) {
        let store = Arc::new(store);
        let service = Arc::new(WaitlistService::new(Arc::clone(&store)));
        (EnrollmentController::new(service), store)
    }

    fn empty_store() -> Store {
        InstrumentedStore::new(InMemoryWaitlistStore::new())
    }

    // =============================================================================
    // SUBMISSION OUTCOMES
    // =============================================================================

    #[tokio::test]
    async fn test_new_email_enrolled() {
        let (controller, store) = wire(empty_store());
        assert_eq!(controller.phase(), EnrollmentPhase::Idle);

        let outcome = controller.submit("coach@example.com").await;

        assert_eq!(outcome, SubmitOutcome::Resolved(EnrollmentPhase::Succeeded));
        assert_eq!(controller.phase().message(), Some(SUCCESS_MESSAGE));

        let entries = store.inner().entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].email, "coach@example.com");
    }

    #[tokio::test]
    async fn test_existing_email_case_and_whitespace_insensitive() {
        let (controller, store) = wire(empty_store());
        store
            .inner()
            .insert(NewWaitlistEntry::server_timestamped("coach@example.com"))
            .await
            .unwrap();

        let outcome = controller.submit("Coach@Example.com ").await;

        assert_eq!(
            outcome,
            SubmitOutcome::Resolved(EnrollmentPhase::Failed(FailureReason::AlreadyEnrolled))
        );
        assert_eq!(store.inner().len().await, 1);
        assert_eq!(store.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_email_never_touches_store() {
        let (controller, store) = wire(empty_store());

        let outcome = controller.submit("not-an-email").await;

        assert_eq!(
            outcome,
            SubmitOutcome::Resolved(EnrollmentPhase::Failed(FailureReason::InvalidEmail))
        );
        assert_eq!(store.query_count(), 0);
        assert_eq!(store.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_then_retry_succeeds() {
        let (controller, store) = wire(empty_store());
        store.set_fail_queries(true);

        controller.submit("coach@example.com").await;
        let phase = controller.phase();
        assert_eq!(phase, EnrollmentPhase::Failed(FailureReason::Transient));
        assert_eq!(
            phase.failure().map(|r| r.as_str()),
            Some("transient error, retry later")
        );
        assert_eq!(store.insert_count(), 0);

        // No automatic retry: the user resubmits once the store is back
        store.set_fail_queries(false);
        assert!(controller.set_input("coach@example.com"));
        let outcome = controller.submit_input().await;

        assert_eq!(outcome, SubmitOutcome::Resolved(EnrollmentPhase::Succeeded));
        assert_eq!(store.query_count(), 2);
        assert_eq!(store.inner().len().await, 1);
    }

    // =============================================================================
    // STATE MACHINE GUARDS
    // =============================================================================

    #[tokio::test]
    async fn test_second_submit_ignored_while_submitting() {
        let gate = Arc::new(Notify::new());
        let (controller, store) = wire(empty_store().with_query_gate(Arc::clone(&gate)));

        let first = controller.submit("coach@example.com");
        let second = async {
            let mut rx = controller.subscribe();
            rx.wait_for(|s| s.phase == EnrollmentPhase::Submitting)
                .await
                .unwrap();

            assert!(!controller.set_input("other@example.com"));
            let outcome = controller.submit("other@example.com").await;
            gate.notify_one();
            outcome
        };

        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, SubmitOutcome::Resolved(EnrollmentPhase::Succeeded));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(store.query_count(), 1);
        assert_eq!(store.inner().len().await, 1);
    }

    #[tokio::test]
    async fn test_no_resubmission_after_success() {
        let (controller, store) = wire(empty_store());

        controller.submit("coach@example.com").await;
        let outcome = controller.submit("second@example.com").await;

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(controller.phase(), EnrollmentPhase::Succeeded);
        assert_eq!(store.query_count(), 1);
        assert_eq!(store.inner().len().await, 1);
    }

    #[tokio::test]
    async fn test_subscriber_sees_every_transition() {
        let gate = Arc::new(Notify::new());
        let (controller, _store) = wire(empty_store().with_query_gate(Arc::clone(&gate)));
        let mut rx = controller.subscribe();

        let submit = controller.submit("coach@example.com");
        let observe = async {
            rx.changed().await.unwrap();
            let submitting = rx.borrow_and_update().phase;
            gate.notify_one();

            rx.changed().await.unwrap();
            let done = rx.borrow_and_update().phase;
            (submitting, done)
        };

        let (_, (submitting, done)) = tokio::join!(submit, observe);

        assert_eq!(submitting, EnrollmentPhase::Submitting);
        assert_eq!(done, EnrollmentPhase::Succeeded);
    }
}
