//! # Waitlist Enrollment
//!
//! Landing-page waitlist subsystem: email validation, duplicate detection
//! against a document store, at-most-once enrollment, and the form's
//! submission state machine.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure business logic, no I/O
//!   - `EmailValidator`: `local@domain.tld` shape check
//!   - `WaitlistEntry`: Persisted record
//!   - `EnrollResult` / `EnrollmentPhase`: Outcomes and form phases
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `WaitlistApi`: Driving port (inbound API)
//!   - `WaitlistStore`: Driven port (document store)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `WaitlistService`: Implements `WaitlistApi`
//!
//! - **Controller Layer** (`controller/`): UI-facing state machine
//!   - `EnrollmentController`: Idle → Submitting → Succeeded | Failed
//!
//! - **Adapters Layer** (`adapters/`): Store implementations
//!   - `InMemoryWaitlistStore`, `FileBackedWaitlistStore`
//!
//! - **Metrics** (`metrics.rs`): Outcome counters and store latencies
//!
//! ## Invariants
//!
//! - Stored emails are normalized (trimmed, lower-cased)
//! - At most one query and one insert per `enroll` call
//! - Duplicate-check-then-insert is not atomic; concurrent sessions can race
//!   unless the store rejects duplicates itself
//!
//! ## Usage Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use waitlist_enrollment::{
//!     EnrollmentController, EnrollmentPhase, InMemoryWaitlistStore, WaitlistService,
//! };
//!
//! let service = Arc::new(WaitlistService::new(Arc::new(InMemoryWaitlistStore::new())));
//! let controller = EnrollmentController::new(service);
//!
//! controller.set_input("Coach@Example.com ");
//! controller.submit_input().await;
//! assert_eq!(controller.phase(), EnrollmentPhase::Succeeded);
//! ```

pub mod adapters;
pub mod controller;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{FileBackedWaitlistStore, InMemoryWaitlistStore};
pub use controller::{EnrollmentController, SubmitOutcome};
pub use domain::{
    normalize_email, EmailValidator, EnrollResult, EnrollmentPhase, EnrollmentState,
    FailureReason, NewWaitlistEntry, WaitlistEntry, SUCCESS_MESSAGE,
};
pub use error::StoreError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{WaitlistApi, WaitlistStore};
pub use service::WaitlistService;
