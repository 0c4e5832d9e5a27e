use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated session, fully carried by the client in its cookie.
///
/// `expires_at - issued_at` is always exactly the configured TTL. Sessions
/// are never mutated in place: expiry and logout produce a new cookie state
/// instead of editing an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub subject_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn mint(subject_id: &str, now: DateTime<Utc>, ttl: u64) -> Self {
        Self {
            subject_id: subject_id.to_string(),
            issued_at: now,
            expires_at: now + Duration::seconds(ttl as i64),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
