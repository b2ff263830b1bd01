//! Shared error type across beacon crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed message.
    BadRequest,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Session exceeded the idle deadline (WS lifecycle, not an error value).
    Timeout,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Timeout => "TIMEOUT",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, BeaconError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum BeaconError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl BeaconError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            BeaconError::BadRequest(_) => ClientCode::BadRequest,
            BeaconError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            BeaconError::Internal(_) => ClientCode::Internal,
        }
    }
}
