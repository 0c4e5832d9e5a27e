use serde::Serialize;

/// Where the application is deployed, as far as cookie security is concerned.
///
/// `Secure` when running in production or when the configured origin is
/// https; `Insecure` otherwise (local development over plain http).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentContext {
    Secure,
    Insecure,
}

impl DeploymentContext {
    /// Classify a deployment from its environment name and origin URL.
    pub fn detect(environment: Option<&str>, origin: &str) -> Self {
        let production = environment.is_some_and(|e| e.eq_ignore_ascii_case("production"));
        if production || origin.starts_with("https://") {
            Self::Secure
        } else {
            Self::Insecure
        }
    }

    /// Classify the current deployment from `ENVIRONMENT` and `ORIGIN`.
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").ok();
        let origin =
            std::env::var("ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::detect(environment.as_deref(), &origin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

/// Attribute set applied to every cookie this crate writes.
///
/// `http_only` is always true. `secure`, `SameSite=None` and `partitioned`
/// are set together or not at all; see `attributes_for`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieAttributes {
    pub secure: bool,
    pub same_site: SameSite,
    pub http_only: bool,
    pub path: &'static str,
    pub partitioned: bool,
}

impl CookieAttributes {
    pub(crate) fn cookie_string(&self, name: &str, value: &str, max_age: i64) -> String {
        let mut cookie = format!("{name}={value}; SameSite={}", self.same_site.as_str());
        if self.secure {
            cookie.push_str("; Secure");
        }
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        cookie.push_str(&format!("; Path={}; Max-Age={max_age}", self.path));
        if self.partitioned {
            cookie.push_str("; Partitioned");
        }
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_production_is_secure() {
        let context = DeploymentContext::detect(Some("production"), "http://localhost:3000");
        assert_eq!(context, DeploymentContext::Secure);
    }

    #[test]
    fn test_detect_https_origin_is_secure() {
        let context = DeploymentContext::detect(None, "https://quiz.example.com");
        assert_eq!(context, DeploymentContext::Secure);
    }

    #[test]
    fn test_detect_local_http_is_insecure() {
        let context = DeploymentContext::detect(Some("development"), "http://localhost:3000");
        assert_eq!(context, DeploymentContext::Insecure);
    }

    #[test]
    fn test_detect_environment_is_case_insensitive() {
        let context = DeploymentContext::detect(Some("Production"), "http://localhost:3000");
        assert_eq!(context, DeploymentContext::Secure);
    }

    #[test]
    fn test_cookie_string_insecure() {
        let attributes = CookieAttributes {
            secure: false,
            same_site: SameSite::Lax,
            http_only: true,
            path: "/",
            partitioned: false,
        };
        assert_eq!(
            attributes.cookie_string("quiz_session", "abc", 600),
            "quiz_session=abc; SameSite=Lax; HttpOnly; Path=/; Max-Age=600"
        );
    }

    #[test]
    fn test_cookie_string_secure() {
        let attributes = CookieAttributes {
            secure: true,
            same_site: SameSite::None,
            http_only: true,
            path: "/",
            partitioned: true,
        };
        assert_eq!(
            attributes.cookie_string("quiz_session", "abc", 0),
            "quiz_session=abc; SameSite=None; Secure; HttpOnly; Path=/; Max-Age=0; Partitioned"
        );
    }
}
