//! Request and response bodies.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use waitlist_enrollment::{EnrollmentPhase, FailureReason};

/// `POST /waitlist` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollRequest {
    pub email: String,
}

/// Rendered enrollment state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentResponse {
    /// `idle`, `submitting`, `succeeded` or `failed`
    pub phase: String,
    /// Short failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Text for the form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<EnrollmentPhase> for EnrollmentResponse {
    fn from(phase: EnrollmentPhase) -> Self {
        let name = match phase {
            EnrollmentPhase::Idle => "idle",
            EnrollmentPhase::Submitting => "submitting",
            EnrollmentPhase::Succeeded => "succeeded",
            EnrollmentPhase::Failed(_) => "failed",
        };

        Self {
            phase: name.to_string(),
            reason: phase.failure().map(|r| r.as_str().to_string()),
            message: phase.message().map(str::to_string),
        }
    }
}

/// HTTP status for a terminal phase
pub fn status_for(phase: EnrollmentPhase) -> StatusCode {
    // A fresh controller always resolves; anything else is a bug upstream
    if !phase.is_terminal() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    match phase.failure() {
        None => StatusCode::CREATED,
        Some(FailureReason::AlreadyEnrolled) => StatusCode::CONFLICT,
        Some(FailureReason::InvalidEmail) => StatusCode::UNPROCESSABLE_ENTITY,
        Some(FailureReason::Transient) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
