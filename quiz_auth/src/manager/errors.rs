use thiserror::Error;

use crate::classifier::ClassifiedError;
use crate::csrf::CsrfError;
use crate::session::SessionError;
use crate::utils::UtilError;

/// Errors that can cross the session-manager boundary.
///
/// Provider failures only ever appear here in classified form; raw provider
/// errors never leave the crate.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Missing or malformed caller input, rejected before any provider call
    #[error("Validation error: {0}")]
    Validation(String),

    /// A provider failure, normalized by the classifier
    #[error("{0}")]
    Classified(ClassifiedError),

    /// Error from session cookie operations
    #[error("Session error: {0}")]
    Session(SessionError),

    /// Error from CSRF token operations
    #[error("CSRF error: {0}")]
    Csrf(CsrfError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(UtilError),
}

impl AuthError {
    /// Log the error and return self, allowing method chaining at the
    /// point where an error is raised.
    pub fn log(self) -> Self {
        match &self {
            Self::Validation(msg) => tracing::warn!("Validation error: {}", msg),
            Self::Classified(err) => {
                tracing::warn!(kind = ?err.kind, origin_code = ?err.origin_code, "Classified error")
            }
            Self::Session(err) => tracing::warn!("Session error: {}", err),
            Self::Csrf(err) => tracing::warn!("CSRF error: {}", err),
            Self::Utils(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }
}

// Custom From implementations that automatically log errors

impl From<ClassifiedError> for AuthError {
    fn from(err: ClassifiedError) -> Self {
        Self::Classified(err).log()
    }
}

impl From<SessionError> for AuthError {
    fn from(err: SessionError) -> Self {
        Self::Session(err).log()
    }
}

impl From<CsrfError> for AuthError {
    fn from(err: CsrfError) -> Self {
        Self::Csrf(err).log()
    }
}

impl From<UtilError> for AuthError {
    fn from(err: UtilError) -> Self {
        Self::Utils(err).log()
    }
}
