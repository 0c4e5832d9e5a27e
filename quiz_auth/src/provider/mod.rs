//! Identity-provider capability consumed by the session manager.
//!
//! The provider owns credential verification and user records; this crate
//! never re-implements either. Implementations are injected into
//! `SessionManager` so there is no process-wide client singleton.

mod errors;
mod types;

pub use errors::ProviderError;
pub use types::{IdentityAssertion, NewUser, UserRecord};

use async_trait::async_trait;

/// Capability surface of the external identity provider.
///
/// All three operations may fail with a raw, provider-shaped error; callers
/// must route failures through the classifier before surfacing them.
/// Operations are expected to be safe to repeat, since the retry runner may
/// invoke them a second time.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify an externally issued identity assertion (e.g. a signed id
    /// token) and return the subject it proves.
    async fn verify_id_token(&self, id_token: &str) -> Result<IdentityAssertion, ProviderError>;

    /// Create a user record.
    async fn create_user(&self, new_user: &NewUser) -> Result<UserRecord, ProviderError>;

    /// Revoke a user record.
    async fn delete_user(&self, subject_id: &str) -> Result<(), ProviderError>;
}
