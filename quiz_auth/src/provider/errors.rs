use thiserror::Error;

/// Raw failure reported by the identity provider.
///
/// The shape is deliberately loose (a code plus free text); it stays inside
/// the crate until the classifier turns it into a `ClassifiedError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ProviderError {
    pub code: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
