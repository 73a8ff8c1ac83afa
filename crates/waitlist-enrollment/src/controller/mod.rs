//! Controller Layer
//!
//! UI-facing state machine driven by the presentation layer.

pub mod enrollment_controller;

pub use enrollment_controller::{EnrollmentController, SubmitOutcome};
