use serde::{Deserialize, Serialize};

/// A verified identity assertion: the provider vouches that the presented
/// id token belongs to `subject_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAssertion {
    /// Opaque provider-issued subject identifier
    pub subject_id: String,
    /// Email the provider associates with the subject, when known
    pub email: Option<String>,
}

/// Fields required to create a user with the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// A user record as reported back by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub subject_id: String,
    pub email: String,
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_serializes_without_email() {
        let assertion = IdentityAssertion {
            subject_id: "subject-1".to_string(),
            email: None,
        };
        let json = serde_json::to_string(&assertion).unwrap();
        let back: IdentityAssertion = serde_json::from_str(&json).unwrap();
        assert_eq!(assertion, back);
    }
}
