//! Combined router for the authentication endpoints

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::state::AuthState;

/// Create the router for the authentication endpoints.
///
/// Mount it under the application's chosen prefix (typically
/// `QUIZ_AUTH_ROUTE_PREFIX`); the endpoints are:
/// - `GET|POST /csrf`
/// - `POST /session`, `GET /session`
/// - `POST /logout`
/// - `POST /register`
pub fn auth_router(state: AuthState) -> Router {
    auth_router_no_trace(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as `auth_router` but without the HTTP tracing middleware, for
/// applications that bring their own.
pub fn auth_router_no_trace(state: AuthState) -> Router {
    super::auth::router().with_state(state)
}
