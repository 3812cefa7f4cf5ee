//! Eligibility service error types.

/// Errors produced at the boundary with the eligibility service. Every call
/// resolves to one of these or a value; none escape as panics.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The service has no application under the requested id
    #[error("{message}")]
    NotFound { message: String },

    /// The service answered with a non-success status
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// No response was received
    #[error("Unable to reach the eligibility service")]
    Unreachable(#[from] reqwest::Error),

    /// The configured service address cannot be used
    #[error("Invalid eligibility service URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A success response whose body did not have the expected shape
    #[error("Unexpected response from the eligibility service")]
    MalformedResponse(#[from] serde_json::Error),
}

impl GatewayError {
    /// HTTP status the service answered with, if it answered at all.
    ///
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::NotFound { .. } => Some(404),
            GatewayError::RequestFailed { status, .. } => Some(*status),
            GatewayError::Unreachable(e) => e.status().map(|s| s.as_u16()),
            GatewayError::InvalidBaseUrl { .. } | GatewayError::MalformedResponse(_) => None,
        }
    }
}
