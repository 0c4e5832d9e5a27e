use http::StatusCode;
use quiz_auth::{AuthError, ErrorKind};

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Map `AuthError` variants to appropriate status codes.
///
/// Validation failures surface their literal reason; everything else gets
/// the classified public message or a generic one. Raw provider detail
/// stays on the server.
impl<T> IntoResponseError<T> for Result<T, AuthError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| match e {
            AuthError::Validation(reason) => (StatusCode::BAD_REQUEST, reason),
            AuthError::Classified(classified) => {
                (status_for_kind(classified.kind), classified.message)
            }
            AuthError::Session(_) | AuthError::Csrf(_) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            AuthError::Utils(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        })
    }
}

pub(super) fn status_for_kind(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidCredentials | ErrorKind::TokenExpired | ErrorKind::TokenInvalid => {
            StatusCode::UNAUTHORIZED
        }
        ErrorKind::AccountAlreadyExists => StatusCode::BAD_REQUEST,
        ErrorKind::RateLimited | ErrorKind::NetworkTransient | ErrorKind::Unknown => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_auth::{ProviderError, classify};

    #[test]
    fn test_validation_maps_to_bad_request_with_reason() {
        let result: Result<(), AuthError> =
            Err(AuthError::Validation("idToken is required".to_string()));
        let (status, message) = result.into_response_error().unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "idToken is required");
    }

    #[test]
    fn test_terminal_token_kinds_map_to_unauthorized() {
        for code in ["auth/id-token-expired", "auth/id-token-revoked", "wrong-password"] {
            let classified = classify(&ProviderError::new(code, "detail"));
            let result: Result<(), AuthError> = Err(AuthError::Classified(classified));
            let (status, message) = result.into_response_error().unwrap_err();
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{code}");
            assert!(!message.contains("detail"));
        }
    }

    #[test]
    fn test_account_exists_maps_to_bad_request() {
        let classified = classify(&ProviderError::new("email-already-in-use", "detail"));
        let result: Result<(), AuthError> = Err(AuthError::Classified(classified));
        let (status, message) = result.into_response_error().unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "An account with this email already exists");
    }

    #[test]
    fn test_exhausted_transient_failures_map_to_server_error() {
        for code in ["too-many-requests", "network-request-failed", "whatever-else"] {
            let classified = classify(&ProviderError::new(code, "detail"));
            let result: Result<(), AuthError> = Err(AuthError::Classified(classified));
            let (status, _) = result.into_response_error().unwrap_err();
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{code}");
        }
    }

    #[test]
    fn test_success_case_passes_through() {
        let result: Result<u32, AuthError> = Ok(5);
        assert_eq!(result.into_response_error().unwrap(), 5);
    }
}
