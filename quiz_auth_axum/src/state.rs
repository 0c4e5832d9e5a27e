use std::sync::Arc;

use quiz_auth::SessionManager;

/// Shared state for the authentication routes.
///
/// The session manager carries its injected identity provider; cloning the
/// state is cheap.
#[derive(Clone)]
pub struct AuthState {
    pub manager: Arc<SessionManager>,
}

impl AuthState {
    pub fn new(manager: Arc<SessionManager>) -> Self {
        Self { manager }
    }
}
