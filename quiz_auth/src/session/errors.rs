use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session cookie missing")]
    Missing,

    #[error("Session cookie malformed")]
    Malformed,

    #[error("Session signature mismatch")]
    SignatureMismatch,

    #[error("Session expired")]
    Expired,

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
