use axum::{
    Router,
    extract::{Json as ExtractJson, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};

use quiz_auth::{CSRF_HEADER_NAME, NewUser};

use super::error::IntoResponseError;
use super::session::{AuthSubject, CsrfGuard};
use super::state::AuthState;

/// Router for the authentication endpoints.
pub(super) fn router() -> Router<AuthState> {
    Router::new()
        .route("/csrf", get(csrf_token).post(csrf_token))
        .route("/session", post(create_session).get(current_session))
        .route("/logout", post(logout))
        .route("/register", post(register))
}

/// Hand out a fresh CSRF token: the readable copy in the body, the cookie
/// copy via Set-Cookie. Clients echo the body copy back under `headerName`.
async fn csrf_token(State(state): State<AuthState>) -> impl IntoResponse {
    match state.manager.issue_csrf_token() {
        Err(e) => {
            tracing::error!("failed to issue CSRF token: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
        Ok((token, headers)) => (
            headers,
            Json(json!({
                "token": token.value,
                "headerName": CSRF_HEADER_NAME,
            })),
        )
            .into_response(),
    }
}

#[derive(Deserialize)]
struct CreateSessionRequest {
    #[serde(rename = "idToken", default)]
    id_token: Option<String>,
}

async fn create_session(
    State(state): State<AuthState>,
    _guard: CsrfGuard,
    ExtractJson(payload): ExtractJson<CreateSessionRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let id_token = payload.id_token.unwrap_or_default();
    let (created, headers) = state
        .manager
        .create_session(&id_token)
        .await
        .into_response_error()?;
    Ok((headers, Json(created)))
}

/// Who-am-I read of the current session.
async fn current_session(subject: AuthSubject) -> Json<Value> {
    Json(json!({ "subjectId": subject.subject_id }))
}

/// Clear the session cookie. Succeeds whether or not a session existed.
async fn logout(State(state): State<AuthState>) -> impl IntoResponse {
    match state.manager.destroy_session() {
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        Ok(headers) => (headers, StatusCode::OK).into_response(),
    }
}

#[derive(Deserialize)]
struct RegisterRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(rename = "displayName", default)]
    display_name: String,
}

async fn register(
    State(state): State<AuthState>,
    _guard: CsrfGuard,
    ExtractJson(payload): ExtractJson<RegisterRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let record = state
        .manager
        .register_user(&NewUser {
            email: payload.email,
            password: payload.password,
            display_name: payload.display_name,
        })
        .await
        .into_response_error()?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "subjectId": record.subject_id })),
    ))
}
