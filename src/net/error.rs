//! Typed failure surface for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure returned by `net::api` calls.
///
/// Pages convert these to display strings at the call site; only
/// `Unauthorized` carries control-flow meaning (refresh or force logout).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The access token was missing, expired, or rejected.
    #[error("not authorized")]
    Unauthorized,
    /// Any other non-success HTTP status.
    #[error("request failed: {status}")]
    Status { status: u16 },
    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-OK HTTP status.
    pub fn from_status(status: u16) -> Self {
        if status == 401 { Self::Unauthorized } else { Self::Status { status } }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
