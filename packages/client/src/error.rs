use thiserror::Error;

/// Failures surfaced by [`crate::ApiClient`] operations.
///
/// `Unreachable` covers transport-level failures (connection refused, DNS,
/// timeout) where no HTTP status was received; `Server` carries the status
/// and the backend's `detail` message when one was present in the body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("server error ({status}): {detail}")]
    Server { status: u16, detail: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Map a transport error from the HTTP layer.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        ApiError::Unreachable(err.to_string())
    }

    /// True when the failure happened before any HTTP status was received.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Unreachable(_))
    }

    /// The server-provided detail message, if the backend reported one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { detail, .. } => Some(detail),
            _ => None,
        }
    }
}
