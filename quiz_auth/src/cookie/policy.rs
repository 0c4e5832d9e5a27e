use super::types::{CookieAttributes, DeploymentContext, SameSite};

/// Cookie attributes for a deployment context.
///
/// Pure: the same context always yields the same attribute set. Secure
/// deployments get `Secure; SameSite=None; Partitioned` as one unit,
/// everything else gets `SameSite=Lax` without the other two. Cookies are
/// host-wide and never readable from script.
pub fn attributes_for(context: DeploymentContext) -> CookieAttributes {
    match context {
        DeploymentContext::Secure => CookieAttributes {
            secure: true,
            same_site: SameSite::None,
            http_only: true,
            path: "/",
            partitioned: true,
        },
        DeploymentContext::Insecure => CookieAttributes {
            secure: false,
            same_site: SameSite::Lax,
            http_only: true,
            path: "/",
            partitioned: false,
        },
    }
}
