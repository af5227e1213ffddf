//! Error taxonomy for backend calls.
//!
//! Errors are surfaced to the caller and converted to UI state at the call
//! site; nothing here is fatal to the app. The worst outcome of any request
//! is a forced logout.

use thiserror::Error;

/// Failure of a single logical API request.
///
/// `Clone` because a coalesced token refresh fans one result out to every
/// request that was waiting on it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status. `message` carries
    /// the human-readable `message`/`error` field from the body when the
    /// backend sent one.
    #[error("{}", message.as_deref().unwrap_or("request failed"))]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// HTTP is unavailable on this target (server-side rendering).
    #[error("http requests are not available on this target")]
    Unsupported,
}

impl ApiError {
    /// HTTP status code, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message suitable for a UI banner, with a generic fallback.
    pub fn ui_message(&self) -> String {
        match self {
            Self::Status { message: Some(m), .. } => m.clone(),
            Self::Status { status, .. } if *status >= 500 => {
                "Something went wrong on our side. Please try again.".to_owned()
            }
            Self::Status { .. } => "Request failed. Please try again.".to_owned(),
            Self::Network(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::Decode(_) => "Unexpected response from the server.".to_owned(),
            Self::Unsupported => "Not available here.".to_owned(),
        }
    }
}
