//! Application aggregate wiring both stores to a configuration.
//!
//! The UI host constructs one [`App`] at process start and passes it down
//! by reference; the stores are explicit dependencies, not globals.

use crate::config::AppConfig;
use crate::store::{CredentialStore, InventoryStore, StorageError};

/// The application: configuration plus the two stores it owns.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    credentials: CredentialStore,
    inventory: InventoryStore,
}

impl App {
    /// Open both stores from the configured file paths.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if either store file exists but cannot be read.
    pub fn open(config: AppConfig) -> Result<Self, StorageError> {
        let credentials = CredentialStore::open(config.users_file())?;
        let inventory = InventoryStore::open(config.inventory_file())?;

        Ok(Self {
            config,
            credentials,
            inventory,
        })
    }

    /// The configuration the stores were opened with.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The credential store.
    #[must_use]
    pub const fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// The credential store, mutably.
    pub const fn credentials_mut(&mut self) -> &mut CredentialStore {
        &mut self.credentials
    }

    /// The inventory store.
    #[must_use]
    pub const fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    /// The inventory store, mutably.
    pub const fn inventory_mut(&mut self) -> &mut InventoryStore {
        &mut self.inventory
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stockroom_core::Role;

    use super::*;

    #[test]
    fn test_open_wires_stores_to_configured_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::with_data_dir(dir.path());

        let mut app = App::open(config).unwrap();
        assert!(app.credentials().is_empty());
        assert!(app.inventory().is_empty());

        app.credentials_mut()
            .register("alice", "p".to_owned(), Role::User, None)
            .unwrap();
        assert!(dir.path().join("users.json").exists());
    }
}
