//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOCKROOM_DATA_DIR` - Directory holding the store files (default: `data`)
//! - `STOCKROOM_USERS_FILE` - Credential file path (default: `<data_dir>/users.json`)
//! - `STOCKROOM_INVENTORY_FILE` - Inventory file path (default: `<data_dir>/inventory.json`)

use std::path::{Path, PathBuf};

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "data";
const USERS_FILE_NAME: &str = "users.json";
const INVENTORY_FILE_NAME: &str = "inventory.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Stockroom application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the store files.
    pub data_dir: PathBuf,
    /// Path of the credential file.
    pub users_file: PathBuf,
    /// Path of the inventory file.
    pub inventory_file: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an empty value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_non_empty_env_or_default(
            "STOCKROOM_DATA_DIR",
            DEFAULT_DATA_DIR,
        )?);

        let users_file = match get_optional_env("STOCKROOM_USERS_FILE") {
            Some(path) => non_empty_path("STOCKROOM_USERS_FILE", path)?,
            None => data_dir.join(USERS_FILE_NAME),
        };
        let inventory_file = match get_optional_env("STOCKROOM_INVENTORY_FILE") {
            Some(path) => non_empty_path("STOCKROOM_INVENTORY_FILE", path)?,
            None => data_dir.join(INVENTORY_FILE_NAME),
        };

        Ok(Self {
            data_dir,
            users_file,
            inventory_file,
        })
    }

    /// Build a configuration rooted at an explicit data directory, using the
    /// default file names. Used by tests and embedding hosts that manage
    /// their own paths.
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let users_file = data_dir.join(USERS_FILE_NAME);
        let inventory_file = data_dir.join(INVENTORY_FILE_NAME);
        Self {
            data_dir,
            users_file,
            inventory_file,
        }
    }

    /// Path of the credential file.
    #[must_use]
    pub fn users_file(&self) -> &Path {
        &self.users_file
    }

    /// Path of the inventory file.
    #[must_use]
    pub fn inventory_file(&self) -> &Path {
        &self.inventory_file
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default, rejecting empty values.
fn get_non_empty_env_or_default(key: &str, default: &str) -> Result<String, ConfigError> {
    match get_optional_env(key) {
        Some(value) if value.is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Some(value) => Ok(value),
        None => Ok(default.to_string()),
    }
}

/// Convert a variable's value into a path, rejecting empty values.
fn non_empty_path(key: &str, value: String) -> Result<PathBuf, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(PathBuf::from(value))
}
