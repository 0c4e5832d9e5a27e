mod provider;
mod server;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use quiz_auth::{DeploymentContext, QUIZ_AUTH_ROUTE_PREFIX, SessionManager};
use quiz_auth_axum::{AuthState, AuthSubject, auth_router};

use crate::provider::DemoIdentityProvider;
use crate::server::{init_tracing, spawn_http_server};

async fn index() -> &'static str {
    "demo-quiz: POST /auth/register, GET /auth/csrf, POST /auth/session with {\"idToken\": \"demo:<email>\"}"
}

async fn protected(subject: AuthSubject) -> Json<Value> {
    Json(json!({
        "message": "only a signed-in player can see this",
        "subjectId": subject.subject_id,
    }))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("demo_quiz");

    let manager = SessionManager::new(
        Arc::new(DemoIdentityProvider::new()),
        DeploymentContext::from_env(),
    );
    let state = AuthState::new(Arc::new(manager));

    let app = Router::new()
        .route("/", get(index))
        .route("/protected", get(protected).with_state(state.clone()))
        .nest(QUIZ_AUTH_ROUTE_PREFIX.as_str(), auth_router(state));

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    spawn_http_server(port, app).await?;
    Ok(())
}
