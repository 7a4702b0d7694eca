//! Credential domain types.
//!
//! The domain [`Credential`] keeps the password in a [`SecretString`] so it
//! cannot leak through `Debug` or logs; the on-disk [`CredentialRecord`]
//! carries it as plaintext because the credential file format does.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use stockroom_core::{Role, Username};

/// A credential record (domain type).
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct Credential {
    /// Unique username.
    pub username: Username,
    /// Account password (plaintext in storage, redacted in memory dumps).
    password: SecretString,
    /// Permission level of the account.
    pub role: Role,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

impl Credential {
    /// Create a new credential.
    #[must_use]
    pub fn new(username: Username, password: impl Into<SecretString>, role: Role) -> Self {
        Self {
            username,
            password: password.into(),
            role,
        }
    }

    /// Check a candidate password against the stored one.
    #[must_use]
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.expose_secret() == candidate
    }

    /// Convert into the on-disk record, exposing the password.
    #[must_use]
    pub fn to_record(&self) -> CredentialRecord {
        CredentialRecord {
            password: self.password.expose_secret().to_owned(),
            role: self.role,
        }
    }

    /// Rebuild the domain type from an on-disk record.
    #[must_use]
    pub fn from_record(username: Username, record: CredentialRecord) -> Self {
        Self {
            username,
            password: SecretString::from(record.password),
            role: record.role,
        }
    }
}

/// On-disk shape of a credential, the value of the username-keyed
/// credential file object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Account password, stored as plaintext per the file format.
    pub password: String,
    /// Permission level of the account.
    pub role: Role,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn credential(password: &str) -> Credential {
        Credential::new(
            Username::parse("alice").unwrap(),
            password.to_owned(),
            Role::User,
        )
    }

    #[test]
    fn test_verify_password() {
        let cred = credential("hunter2");
        assert!(cred.verify_password("hunter2"));
        assert!(!cred.verify_password("hunter3"));
        assert!(!cred.verify_password(""));
    }

    #[test]
    fn test_debug_redacts_password() {
        let cred = credential("super_secret_password");
        let debug_output = format!("{cred:?}");

        assert!(debug_output.contains("alice"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_password"));
    }

    #[test]
    fn test_record_roundtrip() {
        let cred = credential("hunter2");
        let record = cred.to_record();
        assert_eq!(record.password, "hunter2");
        assert_eq!(record.role, Role::User);

        let rebuilt = Credential::from_record(Username::parse("alice").unwrap(), record);
        assert!(rebuilt.verify_password("hunter2"));
        assert_eq!(rebuilt.role, Role::User);
    }

    #[test]
    fn test_record_serde_shape() {
        let record = CredentialRecord {
            password: "adminpass".to_owned(),
            role: Role::Admin,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"password": "adminpass", "role": "Admin"})
        );
    }
}
