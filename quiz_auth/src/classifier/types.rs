use serde::Serialize;
use thiserror::Error;

/// Closed taxonomy of authentication failures.
///
/// Raw provider errors are mapped into exactly one of these kinds; anything
/// unrecognized becomes `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidCredentials,
    AccountAlreadyExists,
    TokenExpired,
    TokenInvalid,
    RateLimited,
    NetworkTransient,
    Unknown,
}

impl ErrorKind {
    /// Only rate limiting and transient network failures warrant a retry;
    /// every other kind is terminal.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::RateLimited | Self::NetworkTransient)
    }

    /// Message safe to show to clients. Provider detail never leaks here;
    /// only `AccountAlreadyExists` gets a specific message.
    pub fn public_message(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid credentials",
            Self::AccountAlreadyExists => "An account with this email already exists",
            Self::TokenExpired => "Authentication token expired",
            Self::TokenInvalid => "Authentication token invalid",
            Self::RateLimited | Self::NetworkTransient => {
                "Authentication service temporarily unavailable"
            }
            Self::Unknown => "Authentication failed",
        }
    }
}

/// A raw provider failure after normalization.
///
/// Created once per failure and immutable afterward; `message` is the
/// public message for `kind`, while the provider's own code survives in
/// `origin_code` for server-side logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub retryable: bool,
    pub message: String,
    pub origin_code: Option<String>,
}
