//! Sealing and opening of the session cookie value.
//!
//! The cookie value is `base64url(claims json) . base64url(hmac-sha256)`,
//! keyed by `AUTH_SERVER_SECRET`. Opaque to clients, stateless on the
//! server; the MAC only guards integrity of the claims the server minted,
//! identity proofs themselves stay with the provider.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::DateTime;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::session::config::AUTH_SERVER_SECRET;
use crate::session::errors::SessionError;
use crate::session::types::Session;
use crate::utils::base64url_decode;

type HmacSha256 = Hmac<Sha256>;

#[derive(Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    iat: i64,
    exp: i64,
}

fn sign(payload: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(&AUTH_SERVER_SECRET).expect("HMAC can take key of any size");
    mac.update(payload);
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

pub(crate) fn seal_session(session: &Session) -> Result<String, SessionError> {
    let claims = SessionClaims {
        sub: session.subject_id.clone(),
        iat: session.issued_at.timestamp(),
        exp: session.expires_at.timestamp(),
    };
    let json = serde_json::to_vec(&claims)
        .map_err(|e| SessionError::Crypto(format!("Failed to serialize session claims: {e}")))?;
    let payload = URL_SAFE_NO_PAD.encode(json);
    let signature = sign(payload.as_bytes());
    Ok(format!("{payload}.{signature}"))
}

pub(crate) fn open_session(cookie_value: &str) -> Result<Session, SessionError> {
    let (payload, signature) = cookie_value
        .split_once('.')
        .ok_or(SessionError::Malformed)?;

    let expected = sign(payload.as_bytes());
    if !bool::from(signature.as_bytes().ct_eq(expected.as_bytes())) {
        tracing::debug!("session cookie signature mismatch");
        return Err(SessionError::SignatureMismatch);
    }

    let json = base64url_decode(payload).map_err(|_| SessionError::Malformed)?;
    let claims: SessionClaims =
        serde_json::from_slice(&json).map_err(|_| SessionError::Malformed)?;

    let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or(SessionError::Malformed)?;
    let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(SessionError::Malformed)?;

    Ok(Session {
        subject_id: claims.sub,
        issued_at,
        expires_at,
    })
}
