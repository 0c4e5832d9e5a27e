use crate::provider::ProviderError;

use super::types::{ClassifiedError, ErrorKind};

/// Map a raw provider failure into the closed taxonomy.
///
/// Total and pure: the same raw error always classifies identically, and no
/// input panics or escapes unclassified. Keyed on the provider's error code
/// first, with a message-pattern fallback for transport-level failures that
/// arrive without a recognizable code.
pub fn classify(raw: &ProviderError) -> ClassifiedError {
    let kind = kind_for(&raw.code, &raw.message);
    if kind == ErrorKind::Unknown {
        // Full detail stays server-side; the client sees the public message.
        tracing::error!(code = %raw.code, message = %raw.message, "unrecognized provider error");
    } else {
        tracing::debug!(code = %raw.code, ?kind, "classified provider error");
    }
    ClassifiedError {
        kind,
        retryable: kind.is_retryable(),
        message: kind.public_message().to_string(),
        origin_code: Some(raw.code.clone()),
    }
}

fn kind_for(code: &str, message: &str) -> ErrorKind {
    // Providers report codes like "auth/id-token-expired"; the prefix is
    // not significant.
    let code = code
        .trim()
        .to_ascii_lowercase()
        .trim_start_matches("auth/")
        .to_string();

    match code.as_str() {
        "invalid-credential" | "invalid-password" | "wrong-password" | "user-not-found"
        | "invalid-login-credentials" | "user-disabled" => ErrorKind::InvalidCredentials,

        "email-already-in-use" | "email-already-exists" | "uid-already-exists"
        | "account-exists-with-different-credential" => ErrorKind::AccountAlreadyExists,

        "id-token-expired" | "session-cookie-expired" | "user-token-expired" => {
            ErrorKind::TokenExpired
        }

        "invalid-id-token" | "id-token-revoked" | "invalid-session-cookie" | "argument-error" => {
            ErrorKind::TokenInvalid
        }

        "too-many-requests" | "quota-exceeded" => ErrorKind::RateLimited,

        "network-request-failed" | "timeout" | "unavailable" | "deadline-exceeded" => {
            ErrorKind::NetworkTransient
        }

        _ => kind_from_message(message),
    }
}

/// Fallback for failures whose code carries no signal, e.g. wrapped
/// transport errors. Anything that does not look transient is `Unknown`.
fn kind_from_message(message: &str) -> ErrorKind {
    let message = message.to_ascii_lowercase();
    let transient = ["network", "timed out", "timeout", "connection", "unavailable"];
    if transient.iter().any(|pattern| message.contains(pattern)) {
        return ErrorKind::NetworkTransient;
    }
    if message.contains("rate limit") || message.contains("too many requests") {
        return ErrorKind::RateLimited;
    }
    ErrorKind::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_code(code: &str) -> ClassifiedError {
        classify(&ProviderError::new(code, "detail"))
    }

    #[test]
    fn test_classify_is_deterministic() {
        let raw = ProviderError::new("auth/too-many-requests", "slow down");
        assert_eq!(classify(&raw), classify(&raw));
    }

    #[test]
    fn test_classify_credential_codes() {
        for code in [
            "invalid-credential",
            "wrong-password",
            "user-not-found",
            "auth/invalid-login-credentials",
        ] {
            let classified = classify_code(code);
            assert_eq!(classified.kind, ErrorKind::InvalidCredentials, "{code}");
            assert!(!classified.retryable);
        }
    }

    #[test]
    fn test_classify_account_exists_codes() {
        for code in ["email-already-in-use", "auth/uid-already-exists"] {
            assert_eq!(classify_code(code).kind, ErrorKind::AccountAlreadyExists);
        }
    }

    #[test]
    fn test_classify_token_codes() {
        assert_eq!(
            classify_code("auth/id-token-expired").kind,
            ErrorKind::TokenExpired
        );
        assert_eq!(
            classify_code("auth/id-token-revoked").kind,
            ErrorKind::TokenInvalid
        );
        assert_eq!(
            classify_code("invalid-session-cookie").kind,
            ErrorKind::TokenInvalid
        );
    }

    #[test]
    fn test_classify_retryable_codes() {
        let rate_limited = classify_code("too-many-requests");
        assert_eq!(rate_limited.kind, ErrorKind::RateLimited);
        assert!(rate_limited.retryable);

        let network = classify_code("network-request-failed");
        assert_eq!(network.kind, ErrorKind::NetworkTransient);
        assert!(network.retryable);
    }

    #[test]
    fn test_classify_falls_back_to_message_patterns() {
        let raw = ProviderError::new("internal", "connection reset by peer");
        assert_eq!(classify(&raw).kind, ErrorKind::NetworkTransient);

        let raw = ProviderError::new("internal", "request timed out after 30s");
        assert_eq!(classify(&raw).kind, ErrorKind::NetworkTransient);

        let raw = ProviderError::new("internal", "rate limit exceeded for project");
        assert_eq!(classify(&raw).kind, ErrorKind::RateLimited);
    }

    #[test]
    fn test_classify_is_total() {
        for (code, message) in [
            ("", ""),
            ("auth/", "   "),
            ("something-new", "the provider made this up yesterday"),
            ("💥", "non-ascii nonsense"),
        ] {
            let classified = classify(&ProviderError::new(code, message));
            assert_eq!(classified.kind, ErrorKind::Unknown);
            assert!(!classified.retryable);
            assert_eq!(classified.message, "Authentication failed");
        }
    }

    #[test]
    fn test_classify_preserves_origin_code() {
        let classified = classify(&ProviderError::new("auth/id-token-expired", "detail"));
        assert_eq!(
            classified.origin_code.as_deref(),
            Some("auth/id-token-expired")
        );
    }

    #[test]
    fn test_classify_code_beats_message() {
        // A terminal code stays terminal even when the message smells transient
        let raw = ProviderError::new("invalid-credential", "network hiccup while checking");
        assert_eq!(classify(&raw).kind, ErrorKind::InvalidCredentials);
    }
}
