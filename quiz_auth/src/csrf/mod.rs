//! Double-submit-cookie CSRF tokens.
//!
//! Tokens are stateless: the server keeps no record of issued tokens.
//! Validity is derived entirely from the two presented copies (explicit
//! header or field, and cookie) plus the expiry carried inside the value.

mod config;
mod errors;
mod issuer;
mod types;

pub use config::{CSRF_COOKIE_MAX_AGE, CSRF_COOKIE_NAME, CSRF_HEADER_NAME};
pub use errors::CsrfError;
pub use issuer::{issue_csrf_token, validate_csrf_pair};
pub use types::CsrfToken;
