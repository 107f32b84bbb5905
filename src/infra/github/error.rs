//! GitHub API error types.

use thiserror::Error;

/// Classified failure of a single GitHub API request.
///
/// Every variant is terminal for the request that produced it: nothing is
/// retried, the error is shown in place of the content it was meant to load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    BadUrl(String),

    #[error("The server took too long to respond")]
    Timeout,

    #[error("Unable to reach the server, check your connection")]
    NetworkUnreachable,

    #[error("Server error, code {0}")]
    BadStatus(u16),

    #[error("Failed to parse response: {0}")]
    DecodeFailure(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// Classify a transport-level reqwest error.
///
/// Status codes and body decoding are handled by the caller, so only the
/// request/connection stages end up here.
pub(crate) fn classify_transport_error(err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_builder() {
        FetchError::BadUrl(err.to_string())
    } else {
        FetchError::NetworkUnreachable
    }
}
