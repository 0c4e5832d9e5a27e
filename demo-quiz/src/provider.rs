//! In-memory identity provider for the demo.
//!
//! Accepts id tokens of the form `demo:<email>` for any registered user and
//! keeps user records in a map. A stand-in for the real managed identity
//! backend; nothing here is production credential handling.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use quiz_auth::{IdentityAssertion, IdentityProvider, NewUser, ProviderError, UserRecord};

#[derive(Default)]
pub(crate) struct DemoIdentityProvider {
    // keyed by email
    users: Mutex<HashMap<String, UserRecord>>,
}

impl DemoIdentityProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityProvider for DemoIdentityProvider {
    async fn verify_id_token(&self, id_token: &str) -> Result<IdentityAssertion, ProviderError> {
        let email = id_token
            .strip_prefix("demo:")
            .ok_or_else(|| ProviderError::new("invalid-id-token", "not a demo token"))?;

        let users = self.users.lock().await;
        let record = users
            .get(email)
            .ok_or_else(|| ProviderError::new("user-not-found", "no such demo user"))?;

        Ok(IdentityAssertion {
            subject_id: record.subject_id.clone(),
            email: Some(record.email.clone()),
        })
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<UserRecord, ProviderError> {
        let mut users = self.users.lock().await;
        if users.contains_key(&new_user.email) {
            return Err(ProviderError::new(
                "email-already-in-use",
                "a demo user with this email exists",
            ));
        }

        let record = UserRecord {
            subject_id: Uuid::new_v4().to_string(),
            email: new_user.email.clone(),
            display_name: new_user.display_name.clone(),
        };
        users.insert(new_user.email.clone(), record.clone());
        Ok(record)
    }

    async fn delete_user(&self, subject_id: &str) -> Result<(), ProviderError> {
        let mut users = self.users.lock().await;
        let email = users
            .iter()
            .find(|(_, record)| record.subject_id == subject_id)
            .map(|(email, _)| email.clone())
            .ok_or_else(|| ProviderError::new("user-not-found", "no such demo user"))?;
        users.remove(&email);
        Ok(())
    }
}
