//! quiz_auth - Session and CSRF lifecycle core for the quiz web application
//!
//! This crate provides the security-sensitive core underneath the login,
//! registration, logout and session-refresh endpoints: cookie security
//! policy, double-submit CSRF tokens, classification of identity-provider
//! failures into a closed taxonomy, a single-retry operation runner, and
//! the session lifecycle itself. Everything is stateless on the server:
//! session and CSRF validity are derived from values carried by the request
//! plus wall-clock time.

mod classifier;
mod config;
mod cookie;
mod csrf;
mod manager;
mod provider;
mod retry;
mod session;
mod utils;

pub use config::QUIZ_AUTH_ROUTE_PREFIX;

pub use classifier::{ClassifiedError, ErrorKind, classify};

pub use cookie::{CookieAttributes, DeploymentContext, SameSite, attributes_for};

pub use csrf::{
    CSRF_COOKIE_NAME, CSRF_HEADER_NAME, CsrfError, CsrfToken, issue_csrf_token, validate_csrf_pair,
};

pub use manager::{AuthError, SessionCreated, SessionManager};

pub use provider::{IdentityAssertion, IdentityProvider, NewUser, ProviderError, UserRecord};

pub use retry::{RetryPolicy, run_with_retry};

pub use session::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, Session, SessionError};

pub use utils::UtilError;
