use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Response},
};
use axum_extra::{TypedHeader, headers};
use chrono::Utc;
use http::{Method, StatusCode, request::Parts};

use quiz_auth::{CSRF_COOKIE_NAME, CSRF_HEADER_NAME, validate_csrf_pair};

use super::state::AuthState;

/// Rejection shared by the authentication extractors: a bare status with a
/// generic message, never the underlying failure detail.
pub struct AuthRejection {
    status: StatusCode,
    message: &'static str,
}

impl AuthRejection {
    fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: "Unauthorized",
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// The authenticated subject of the current request.
///
/// As an extractor this validates the session cookie, and for
/// state-changing methods (POST, PUT, DELETE, PATCH) additionally enforces
/// the CSRF double-submit pair before the handler runs.
#[derive(Clone, Debug)]
pub struct AuthSubject {
    /// Opaque identity-provider subject identifier
    pub subject_id: String,
}

impl<S> FromRequestParts<S> for AuthSubject
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AuthState::from_ref(state);
        let method = parts.method.clone();

        let cookies: TypedHeader<headers::Cookie> = parts.extract().await.map_err(|_| {
            tracing::debug!("no cookie header on request");
            AuthRejection::unauthorized()
        })?;

        let subject_id = state.manager.subject_from_cookies(&cookies).map_err(|e| {
            tracing::debug!("session validation failed: {e}");
            AuthRejection::unauthorized()
        })?;

        if method == Method::POST
            || method == Method::PUT
            || method == Method::DELETE
            || method == Method::PATCH
        {
            verify_double_submit(parts, &cookies)?;
        }

        Ok(AuthSubject { subject_id })
    }
}

impl<S> OptionalFromRequestParts<S> for AuthSubject
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, Self::Rejection> =
            <AuthSubject as FromRequestParts<S>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}

/// CSRF double-submit guard for handlers that do not need a session.
///
/// Login and registration run anonymously but still change state, so they
/// require the token pair independently of any session cookie.
pub struct CsrfGuard;

impl<S> FromRequestParts<S> for CsrfGuard
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let cookies: TypedHeader<headers::Cookie> = parts.extract().await.map_err(|_| {
            tracing::debug!("no cookie header on CSRF-guarded request");
            AuthRejection::unauthorized()
        })?;
        verify_double_submit(parts, &cookies)?;
        Ok(CsrfGuard)
    }
}

fn verify_double_submit(
    parts: &Parts,
    cookies: &headers::Cookie,
) -> Result<(), AuthRejection> {
    let presented = parts
        .headers
        .get(CSRF_HEADER_NAME)
        .and_then(|h| h.to_str().ok());
    let cookie_value = cookies.get(CSRF_COOKIE_NAME.as_str());

    validate_csrf_pair(presented, cookie_value, Utc::now()).map_err(|e| {
        tracing::debug!("CSRF validation failed: {e}");
        AuthRejection::unauthorized()
    })
}
