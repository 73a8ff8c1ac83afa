//! Enrollment outcomes and the submission state
//!
//! `EnrollResult` is what the service returns; `EnrollmentPhase` is what the
//! presentation layer renders. Failure carries its reason as payload so a
//! phase can never be succeeded and errored at once.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal outcome of one `enroll` call
///
/// All four are ordinary values. None of them is a panic or an `Err`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollResult {
    /// A new entry was inserted
    Enrolled,
    /// The normalized address is already on the waitlist
    AlreadyEnrolled,
    /// The address failed the shape check; the store was not contacted
    Invalid,
    /// The store query or insert failed
    StoreFailure,
}

/// Why a submission ended in `Failed`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    AlreadyEnrolled,
    InvalidEmail,
    Transient,
}

impl FailureReason {
    /// Short reason string
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::AlreadyEnrolled => "already on waitlist",
            FailureReason::InvalidEmail => "invalid email format",
            FailureReason::Transient => "transient error, retry later",
        }
    }

    /// Message shown next to the form
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureReason::AlreadyEnrolled => {
                "This email is already on our waitlist. Thank you for your interest!"
            }
            FailureReason::InvalidEmail => "Please enter a valid email address.",
            FailureReason::Transient => "Something went wrong. Please try again later.",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confirmation shown once enrolled
pub const SUCCESS_MESSAGE: &str = "You're on the list! We'll keep you posted.";

impl EnrollResult {
    /// Phase the controller lands in for this outcome
    pub fn into_phase(self) -> EnrollmentPhase {
        match self {
            EnrollResult::Enrolled => EnrollmentPhase::Succeeded,
            EnrollResult::AlreadyEnrolled => {
                EnrollmentPhase::Failed(FailureReason::AlreadyEnrolled)
            }
            EnrollResult::Invalid => EnrollmentPhase::Failed(FailureReason::InvalidEmail),
            EnrollResult::StoreFailure => EnrollmentPhase::Failed(FailureReason::Transient),
        }
    }
}

/// Submission phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "reason", rename_all = "snake_case")]
pub enum EnrollmentPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FailureReason),
}

impl EnrollmentPhase {
    /// Input can be edited and submitted
    pub fn accepts_input(&self) -> bool {
        matches!(self, EnrollmentPhase::Idle | EnrollmentPhase::Failed(_))
    }

    /// Succeeded or failed
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EnrollmentPhase::Succeeded | EnrollmentPhase::Failed(_)
        )
    }

    /// Failure reason, if any
    pub fn failure(&self) -> Option<FailureReason> {
        match self {
            EnrollmentPhase::Failed(reason) => Some(*reason),
            _ => None,
        }
    }

    /// User-visible text for this phase, if the form shows one
    pub fn message(&self) -> Option<&'static str> {
        match self {
            EnrollmentPhase::Idle | EnrollmentPhase::Submitting => None,
            EnrollmentPhase::Succeeded => Some(SUCCESS_MESSAGE),
            EnrollmentPhase::Failed(reason) => Some(reason.user_message()),
        }
    }
}

/// Observable per-visit form state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnrollmentState {
    pub phase: EnrollmentPhase,
    /// Raw text currently in the input field
    pub input_email: String,
}
