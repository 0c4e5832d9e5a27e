//! quiz_auth_axum - Axum integration for the quiz-auth core
//!
//! Exposes the authentication endpoints (`/csrf`, `/session`, `/logout`,
//! `/register`) as an axum router plus request extractors for the session
//! subject and the CSRF double-submit guard.

mod auth;
mod error;
mod router;
mod session;
mod state;

pub use router::{auth_router, auth_router_no_trace};
pub use session::{AuthRejection, AuthSubject, CsrfGuard};
pub use state::AuthState;

// Re-export the pieces handlers and consumers typically need alongside the router
pub use quiz_auth::{
    CSRF_HEADER_NAME, DeploymentContext, QUIZ_AUTH_ROUTE_PREFIX, SESSION_COOKIE_NAME,
    SessionManager,
};
