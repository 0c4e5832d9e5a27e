//! Central configuration for the quiz_auth crate

use std::sync::LazyLock;

/// Route prefix under which the authentication endpoints are mounted
///
/// Default: "/auth"
pub static QUIZ_AUTH_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(|| {
    std::env::var("QUIZ_AUTH_ROUTE_PREFIX").unwrap_or_else(|_| "/auth".to_string())
});
