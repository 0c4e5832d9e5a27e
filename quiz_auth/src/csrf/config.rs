use std::sync::LazyLock;

/// Header clients echo the token back in. Surfaced to them by the `/csrf`
/// endpoint as a stable constant.
pub const CSRF_HEADER_NAME: &str = "X-CSRF-Token";

pub static CSRF_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("CSRF_COOKIE_NAME")
        .ok()
        .unwrap_or("quiz_csrf".to_string())
});

pub static CSRF_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("CSRF_COOKIE_MAX_AGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3600) // Default to 1 hour if not set or invalid
});
