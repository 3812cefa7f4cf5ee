//! State management-specific error types.

use crate::validation::FieldErrors;

/// Reasons a transition request was refused. None of these change state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The active step's fields did not validate
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// The personal-info submission has not resolved yet
    #[error("Application submission already in progress")]
    SubmissionPending,

    /// The wizard is in its terminal state
    #[error("Application already submitted")]
    AlreadySubmitted,
}
