use std::sync::Arc;

use chrono::Utc;
use http::header::HeaderMap;
use serde::Serialize;

use crate::cookie::{DeploymentContext, attributes_for};
use crate::csrf::{CsrfError, CsrfToken, issue_csrf_token};
use crate::provider::{IdentityProvider, NewUser, UserRecord};
use crate::retry::{RetryPolicy, run_with_retry};
use crate::session::{
    SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, Session, SessionError, open_session, seal_session,
};
use crate::utils::header_set_cookie;

use super::errors::AuthError;

/// Outcome of a successful `create_session`, shaped for the API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    pub subject_id: String,
    pub expires_in: u64,
}

/// Coordinates the session lifecycle:
/// Anonymous → Authenticating → Authenticated → (Expired | LoggedOut).
///
/// The identity provider is injected at construction; verification of
/// identity assertions and user-record management are delegated to it,
/// wrapped in the retry runner and the classifier.
pub struct SessionManager {
    provider: Arc<dyn IdentityProvider>,
    retry: RetryPolicy,
    context: DeploymentContext,
}

impl SessionManager {
    pub fn new(provider: Arc<dyn IdentityProvider>, context: DeploymentContext) -> Self {
        Self {
            provider,
            retry: RetryPolicy::default(),
            context,
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Establish a session from an identity assertion.
    ///
    /// A missing assertion fails validation before any provider call. On a
    /// classified terminal failure no cookie is set and the caller stays
    /// anonymous. On success the returned headers carry the session cookie
    /// and `expires_in` is always the configured TTL.
    pub async fn create_session(
        &self,
        id_token: &str,
    ) -> Result<(SessionCreated, HeaderMap), AuthError> {
        if id_token.trim().is_empty() {
            return Err(AuthError::Validation("idToken is required".to_string()).log());
        }

        let assertion =
            run_with_retry(self.retry, || self.provider.verify_id_token(id_token)).await?;

        let ttl = *SESSION_COOKIE_MAX_AGE;
        let session = Session::mint(&assertion.subject_id, Utc::now(), ttl);
        let cookie_value = seal_session(&session)?;

        let mut headers = HeaderMap::new();
        header_set_cookie(
            &mut headers,
            SESSION_COOKIE_NAME.as_str(),
            &cookie_value,
            ttl as i64,
            &attributes_for(self.context),
        )?;

        tracing::debug!(subject_id = %session.subject_id, "session created");
        Ok((
            SessionCreated {
                subject_id: session.subject_id,
                expires_in: ttl,
            },
            headers,
        ))
    }

    /// Read-only check of a presented session cookie value.
    ///
    /// Fails when the cookie is absent, malformed, or past its expiry; an
    /// expired session is indistinguishable from no session to callers.
    pub fn validate_session(&self, cookie_value: &str) -> Result<String, SessionError> {
        self.validate_session_at(cookie_value, Utc::now())
    }

    pub(crate) fn validate_session_at(
        &self,
        cookie_value: &str,
        now: chrono::DateTime<Utc>,
    ) -> Result<String, SessionError> {
        if cookie_value.is_empty() {
            return Err(SessionError::Missing);
        }
        let session = open_session(cookie_value)?;
        if session.is_expired(now) {
            return Err(SessionError::Expired);
        }
        Ok(session.subject_id)
    }

    /// Convenience over `validate_session` for a parsed Cookie header.
    pub fn subject_from_cookies(&self, cookies: &headers::Cookie) -> Result<String, SessionError> {
        let cookie_value = cookies
            .get(SESSION_COOKIE_NAME.as_str())
            .ok_or(SessionError::Missing)?;
        self.validate_session(cookie_value)
    }

    /// Prepare the logout response: a cookie with empty value and
    /// `Max-Age=0`, built from the same attribute policy as creation so the
    /// clear matches in every browser context. Idempotent; succeeds whether
    /// or not a session existed.
    pub fn destroy_session(&self) -> Result<HeaderMap, SessionError> {
        let mut headers = HeaderMap::new();
        header_set_cookie(
            &mut headers,
            SESSION_COOKIE_NAME.as_str(),
            "",
            0,
            &attributes_for(self.context),
        )?;
        Ok(headers)
    }

    /// Issue a CSRF token for this deployment's cookie policy.
    pub fn issue_csrf_token(&self) -> Result<(CsrfToken, HeaderMap), CsrfError> {
        issue_csrf_token(self.context)
    }

    /// Create a user with the identity provider.
    pub async fn register_user(&self, new_user: &NewUser) -> Result<UserRecord, AuthError> {
        if new_user.email.trim().is_empty() || !new_user.email.contains('@') {
            return Err(AuthError::Validation("a valid email is required".to_string()).log());
        }
        if new_user.password.len() < 8 {
            return Err(
                AuthError::Validation("password must be at least 8 characters".to_string()).log(),
            );
        }

        let record = run_with_retry(self.retry, || self.provider.create_user(new_user)).await?;
        tracing::debug!(subject_id = %record.subject_id, "user registered");
        Ok(record)
    }

    /// Revoke a user record with the identity provider.
    pub async fn delete_user(&self, subject_id: &str) -> Result<(), AuthError> {
        if subject_id.is_empty() {
            return Err(AuthError::Validation("subject id is required".to_string()).log());
        }
        run_with_retry(self.retry, || self.provider.delete_user(subject_id)).await?;
        Ok(())
    }
}
