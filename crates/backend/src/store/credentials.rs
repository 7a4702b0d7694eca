//! Credential store: registration and authentication over a file-backed
//! username → credential map.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use thiserror::Error;

use stockroom_core::{Role, Username, UsernameError};

use super::StorageError;
use crate::models::credential::{Credential, CredentialRecord};

/// Errors that can occur during credential operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid username format.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// The username is already registered.
    #[error("username already exists")]
    DuplicateUsername,

    /// The acting user may not create an admin account.
    #[error("only admins can create admin accounts")]
    Unauthorized,

    /// User not found.
    #[error("user not found")]
    UserNotFound,

    /// Password mismatch.
    #[error("incorrect password")]
    BadCredentials,

    /// Storage error while persisting the collection.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// File-backed credential store.
///
/// The whole collection lives in memory; every successful mutation rewrites
/// the backing file (an object mapping username → `{password, role}`).
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    users: BTreeMap<Username, Credential>,
}

impl CredentialStore {
    /// Open the store, loading the credential file into memory.
    ///
    /// A missing or malformed file yields an empty store. The parent
    /// directory is created so the first mutation can persist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        super::ensure_parent_dir(&path)?;

        let records: BTreeMap<Username, CredentialRecord> = super::load_or_default(&path)?;
        let users = records
            .into_iter()
            .map(|(username, record)| {
                let credential = Credential::from_record(username.clone(), record);
                (username, credential)
            })
            .collect();

        let store = Self { path, users };
        tracing::debug!(
            path = %store.path.display(),
            users = store.users.len(),
            "credential store opened"
        );
        Ok(store)
    }

    /// Register a new account.
    ///
    /// The duplicate check runs before the authorization check, so a taken
    /// username fails with `DuplicateUsername` regardless of role.
    ///
    /// Creating an admin account requires `acting_role == Some(Role::Admin)`,
    /// with one exception: when no acting role is supplied and the store
    /// holds no admin yet, the registration bootstraps the first admin.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUsername`, `DuplicateUsername`, `Unauthorized`, or
    /// `Storage` if persisting the collection fails.
    pub fn register(
        &mut self,
        username: &str,
        password: impl Into<SecretString>,
        role: Role,
        acting_role: Option<Role>,
    ) -> Result<(), AuthError> {
        let username = Username::parse(username)?;

        if self.users.contains_key(&username) {
            return Err(AuthError::DuplicateUsername);
        }

        if role.is_admin() {
            let permitted = match acting_role {
                Some(acting) => acting.is_admin(),
                // First-admin bootstrap: an unattributed registration may
                // create the initial admin account.
                None => !self.has_admin(),
            };
            if !permitted {
                return Err(AuthError::Unauthorized);
            }
        }

        let credential = Credential::new(username.clone(), password, role);
        self.users.insert(username.clone(), credential);
        self.persist()?;

        tracing::info!(username = %username, role = %role, "registered account");
        Ok(())
    }

    /// Authenticate a username/password pair, returning the full credential
    /// (role included) on success.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the username is absent and `BadCredentials`
    /// on a password mismatch.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&Credential, AuthError> {
        let credential = self.users.get(username).ok_or(AuthError::UserNotFound)?;

        if !credential.verify_password(password) {
            return Err(AuthError::BadCredentials);
        }

        Ok(credential)
    }

    /// Look up a credential by username.
    #[must_use]
    pub fn get(&self, username: &str) -> Option<&Credential> {
        self.users.get(username)
    }

    /// Whether a username is registered.
    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Whether any admin account exists.
    #[must_use]
    pub fn has_admin(&self) -> bool {
        self.users.values().any(|c| c.role.is_admin())
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing file with the full collection.
    fn persist(&self) -> Result<(), StorageError> {
        let records: BTreeMap<&Username, CredentialRecord> = self
            .users
            .iter()
            .map(|(username, credential)| (username, credential.to_record()))
            .collect();
        super::save(&self.path, &records)
    }
}
