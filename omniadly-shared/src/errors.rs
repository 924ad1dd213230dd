//! # API Error Types
//!
//! Failures observed while talking to the OmniAdly REST API. Every
//! collaborator of the admin gate reports through [`ApiError`] so the gate
//! can treat them uniformly.

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Error raised by an API call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("Unable to reach the server: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}")]
    Status { status: u16, body: String },

    /// The body could not be decoded into the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// The envelope reported `success: false`
    #[error("{message}")]
    Rejected { message: String },
}

impl ApiError {
    /// HTTP status of the failure, when there was one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server refused the credentials.
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}
