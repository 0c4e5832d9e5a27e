use chrono::{DateTime, Duration, Utc};

use crate::utils::{UtilError, gen_random_string};

use super::errors::CsrfError;

/// An anti-forgery token as handed to a client.
///
/// `value` is the full wire form: a high-entropy random part followed by
/// the expiry in unix seconds, separated by a dot. Carrying the expiry in
/// the value keeps validation stateless; tampering with it changes the
/// bytes compared against the cookie copy, so a forged expiry can never
/// validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    pub value: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl CsrfToken {
    pub(super) fn mint(now: DateTime<Utc>, ttl: u64) -> Result<Self, UtilError> {
        let expires_at = now + Duration::seconds(ttl as i64);
        let random = gen_random_string(32)?;
        Ok(Self {
            value: format!("{random}.{}", expires_at.timestamp()),
            issued_at: now,
            expires_at,
        })
    }

    /// Expiry encoded in a wire-form token value.
    pub(super) fn expiry_of(value: &str) -> Result<DateTime<Utc>, CsrfError> {
        let (_, expiry) = value.rsplit_once('.').ok_or(CsrfError::Malformed)?;
        let seconds: i64 = expiry.parse().map_err(|_| CsrfError::Malformed)?;
        DateTime::from_timestamp(seconds, 0).ok_or(CsrfError::Malformed)
    }
}
