//! API error types.

use thiserror::Error;

/// Errors from talking to the backend.
///
/// `Rejected` is the one business-level variant: the HTTP exchange worked
/// but the response envelope said `success: false`. Everything else is a
/// transport or contract failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the connection dropped.
    #[error("Connection error: {0}")]
    Transport(String),

    /// Request ran past the configured timeout.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Server answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// Status code.
        status: u16,
        /// Body preview, or a generic note when the body was empty.
        message: String,
    },

    /// Body was not the JSON shape the endpoint promises.
    #[error("Deserialization error: {0}")]
    Decode(String),

    /// Envelope came back with `success: false`; carries the server's
    /// message verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The bearer token is no longer valid; the session must be dropped.
    #[error("Session expired")]
    SessionExpired,
}

impl ApiError {
    /// Check if this error means the session is gone.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    /// Check if this is the business-rejection variant.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected(_))
    }
}
