use chrono::{DateTime, Utc};
use http::header::HeaderMap;
use subtle::ConstantTimeEq;

use crate::cookie::{DeploymentContext, attributes_for};
use crate::utils::header_set_cookie;

use super::config::{CSRF_COOKIE_MAX_AGE, CSRF_COOKIE_NAME};
use super::errors::CsrfError;
use super::types::CsrfToken;

/// Issue a fresh token and the Set-Cookie header carrying its cookie copy.
///
/// The caller surfaces `token.value` to the client (body or header) under
/// `CSRF_HEADER_NAME`; the cookie copy rides along in the returned headers.
/// Re-issuing is idempotent: the new cookie overwrites the old one, which
/// thereby stops validating.
pub fn issue_csrf_token(context: DeploymentContext) -> Result<(CsrfToken, HeaderMap), CsrfError> {
    let token = CsrfToken::mint(Utc::now(), *CSRF_COOKIE_MAX_AGE)?;

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        CSRF_COOKIE_NAME.as_str(),
        &token.value,
        *CSRF_COOKIE_MAX_AGE as i64,
        &attributes_for(context),
    )?;

    Ok((token, headers))
}

/// Double-submit check: the explicitly presented value must equal the
/// cookie copy, and the pair must be unexpired.
///
/// Comparison runs in constant time and happens before the expiry check, so
/// mismatched pairs are rejected regardless of expiry. Token values are
/// never logged.
pub fn validate_csrf_pair(
    presented: Option<&str>,
    cookie_value: Option<&str>,
    now: DateTime<Utc>,
) -> Result<(), CsrfError> {
    let presented = presented.filter(|v| !v.is_empty()).ok_or(CsrfError::Missing)?;
    let cookie_value = cookie_value
        .filter(|v| !v.is_empty())
        .ok_or(CsrfError::Missing)?;

    if !bool::from(presented.as_bytes().ct_eq(cookie_value.as_bytes())) {
        tracing::debug!("CSRF double-submit mismatch");
        return Err(CsrfError::Mismatch);
    }

    let expires_at = CsrfToken::expiry_of(cookie_value)?;
    if now > expires_at {
        tracing::debug!("CSRF token expired");
        return Err(CsrfError::Expired);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use http::header::SET_COOKIE;
    use proptest::prelude::*;

    #[test]
    fn test_issue_sets_cookie_with_policy_attributes() {
        let (token, headers) = issue_csrf_token(DeploymentContext::Insecure).unwrap();

        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with(&format!("{}={}", CSRF_COOKIE_NAME.as_str(), token.value)));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(!cookie.contains("Partitioned"));
    }

    #[test]
    fn test_issue_secure_context_cookie_attributes() {
        let (_, headers) = issue_csrf_token(DeploymentContext::Secure).unwrap();

        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=None"));
        assert!(cookie.contains("Partitioned"));
    }

    #[test]
    fn test_fresh_token_validates_immediately() {
        let (token, _) = issue_csrf_token(DeploymentContext::Insecure).unwrap();
        let result = validate_csrf_pair(Some(&token.value), Some(&token.value), Utc::now());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_mismatched_pair_is_rejected() {
        let (token, _) = issue_csrf_token(DeploymentContext::Insecure).unwrap();
        let (other, _) = issue_csrf_token(DeploymentContext::Insecure).unwrap();
        let result = validate_csrf_pair(Some(&token.value), Some(&other.value), Utc::now());
        assert_eq!(result, Err(CsrfError::Mismatch));
    }

    #[test]
    fn test_absent_copies_are_rejected() {
        let (token, _) = issue_csrf_token(DeploymentContext::Insecure).unwrap();
        let now = Utc::now();

        assert_eq!(
            validate_csrf_pair(None, Some(&token.value), now),
            Err(CsrfError::Missing)
        );
        assert_eq!(
            validate_csrf_pair(Some(&token.value), None, now),
            Err(CsrfError::Missing)
        );
        assert_eq!(
            validate_csrf_pair(Some(""), Some(&token.value), now),
            Err(CsrfError::Missing)
        );
    }

    #[test]
    fn test_expired_token_is_rejected_even_when_matching() {
        let token = CsrfToken::mint(Utc::now() - Duration::seconds(7200), 3600).unwrap();
        let result = validate_csrf_pair(Some(&token.value), Some(&token.value), Utc::now());
        assert_eq!(result, Err(CsrfError::Expired));
    }

    #[test]
    fn test_validation_at_exact_expiry_still_passes() {
        let now = Utc::now();
        let token = CsrfToken::mint(now, 3600).unwrap();
        let result = validate_csrf_pair(Some(&token.value), Some(&token.value), token.expires_at);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_matching_but_malformed_pair_is_rejected() {
        // Matching copies that never came from the issuer carry no expiry
        let result = validate_csrf_pair(Some("forged"), Some("forged"), Utc::now());
        assert_eq!(result, Err(CsrfError::Malformed));
    }

    #[test]
    fn test_reissue_produces_unrelated_token() {
        let (first, _) = issue_csrf_token(DeploymentContext::Insecure).unwrap();
        let (second, _) = issue_csrf_token(DeploymentContext::Insecure).unwrap();
        // The overwritten cookie no longer validates against the old value
        assert_eq!(
            validate_csrf_pair(Some(&first.value), Some(&second.value), Utc::now()),
            Err(CsrfError::Mismatch)
        );
    }

    proptest! {
        /// Any non-equal pair is rejected, regardless of expiry content.
        #[test]
        fn prop_non_equal_pairs_never_validate(a in "[A-Za-z0-9_-]{1,64}", b in "[A-Za-z0-9_-]{1,64}") {
            prop_assume!(a != b);
            let result = validate_csrf_pair(Some(&a), Some(&b), Utc::now());
            prop_assert_eq!(result, Err(CsrfError::Mismatch));
        }
    }
}
