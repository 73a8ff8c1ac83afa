//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Email shape validation and normalization
//! - Waitlist entities
//! - Enrollment outcomes and the submission phase
//! - Uniqueness invariant checks
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod email;
pub mod enrollment;
pub mod entities;
pub mod invariants;

pub use email::{normalize_email, EmailValidator};
pub use enrollment::{
    EnrollResult, EnrollmentPhase, EnrollmentState, FailureReason, SUCCESS_MESSAGE,
};
pub use entities::{NewWaitlistEntry, WaitlistEntry};
pub use invariants::{duplicate_emails, invariant_unique_emails};
