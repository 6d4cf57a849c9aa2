//! Submission errors
//!
//! `Display` is the text shown to the person filling in the form.

use thiserror::Error;

pub const DEFAULT_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Your registration is already being submitted")]
    AlreadyInFlight,

    /// The gateway answered `success: false`
    #[error("{0}")]
    Rejected(String),

    /// The gateway could not be reached or answered garbage
    #[error("Registration failed. Please try again.")]
    Gateway(String),

    #[error("Registration was cancelled")]
    Cancelled,

    #[error("Registration failed. Please try again.")]
    TaskFailed(String),
}

impl SubmissionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SubmissionError::AlreadyInFlight => "SUBMISSION_IN_FLIGHT",
            SubmissionError::Rejected(_) => "REGISTRATION_REJECTED",
            SubmissionError::Gateway(_) => "GATEWAY_ERROR",
            SubmissionError::Cancelled => "SUBMISSION_CANCELLED",
            SubmissionError::TaskFailed(_) => "SUBMISSION_TASK_FAILED",
        }
    }

    /// Whether the form should offer the submit control again
    pub fn is_resubmittable(&self) -> bool {
        !matches!(self, SubmissionError::AlreadyInFlight)
    }
}
