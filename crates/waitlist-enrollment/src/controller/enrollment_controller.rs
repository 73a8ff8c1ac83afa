//! Enrollment Controller
//!
//! Owns the per-visit submission state machine:
//!
//! ```text
//! Idle ──submit──→ Submitting ──Enrolled──────────→ Succeeded
//!   ↑                  │
//!   │                  ├──AlreadyEnrolled──→ Failed(already on waitlist)
//!   │                  ├──Invalid──────────→ Failed(invalid email format)
//!   │                  └──StoreFailure─────→ Failed(transient error, retry later)
//!   │                                              │
//!   └─────────── (Failed accepts input and submit) ┘
//! ```
//!
//! State is published on a `watch` channel so the presentation layer can
//! render every transition.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::domain::{EnrollmentPhase, EnrollmentState};
use crate::ports::WaitlistApi;

/// Result of a `submit` call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission ran to completion and landed in this phase
    Resolved(EnrollmentPhase),
    /// Not accepted: a submission is in flight or already succeeded
    Ignored,
}

/// Per-visit enrollment form controller
pub struct EnrollmentController<A: WaitlistApi + ?Sized> {
    api: Arc<A>,
    state: watch::Sender<EnrollmentState>,
}

impl<A: WaitlistApi + ?Sized> EnrollmentController<A> {
    /// New controller in `Idle` with an empty input
    pub fn new(api: Arc<A>) -> Self {
        let (state, _) = watch::channel(EnrollmentState::default());
        Self { api, state }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> EnrollmentState {
        self.state.borrow().clone()
    }

    /// Current phase
    pub fn phase(&self) -> EnrollmentPhase {
        self.state.borrow().phase
    }

    /// Observe every state change
    pub fn subscribe(&self) -> watch::Receiver<EnrollmentState> {
        self.state.subscribe()
    }

    /// Keystroke into the input field
    ///
    /// Returns false, leaving the input untouched, while submitting or after
    /// success.
    pub fn set_input(&self, raw: &str) -> bool {
        self.state.send_if_modified(|state| {
            if !state.phase.accepts_input() {
                return false;
            }
            state.input_email = raw.to_string();
            true
        })
    }

    /// Submit whatever is currently in the input field
    pub async fn submit_input(&self) -> SubmitOutcome {
        let raw = self.state.borrow().input_email.clone();
        self.submit(&raw).await
    }

    /// Explicit user submission
    ///
    /// Moves to `Submitting`, awaits the enrollment to completion and lands in
    /// `Succeeded` or `Failed`. There is no timeout and no cancellation.
    pub async fn submit(&self, raw_email: &str) -> SubmitOutcome {
        let started = self.state.send_if_modified(|state| {
            if !state.phase.accepts_input() {
                return false;
            }
            state.input_email = raw_email.to_string();
            state.phase = EnrollmentPhase::Submitting;
            true
        });

        if !started {
            debug!(phase = ?self.phase(), "Submission ignored");
            return SubmitOutcome::Ignored;
        }

        let result = self.api.enroll(raw_email).await;
        let phase = result.into_phase();
        self.state.send_modify(|state| state.phase = phase);

        info!(result = ?result, "Email submission processed");
        SubmitOutcome::Resolved(phase)
    }
}
