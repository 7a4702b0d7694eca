//! File-backed stores.
//!
//! Each store owns an in-memory collection paired with whole-file JSON
//! load/save persistence: the collection is read once when the store is
//! opened and the backing file is rewritten in full after every mutation.
//! Last write wins; concurrent writers are out of scope.

pub mod credentials;
pub mod inventory;

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use credentials::{AuthError, CredentialStore};
pub use inventory::{InventoryError, InventoryStore};

/// Errors that can occur while reading or writing a store file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem error.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The collection could not be serialized.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load a whole collection from a JSON file.
///
/// A missing file and malformed JSON both yield the empty collection; any
/// other I/O failure propagates.
pub(crate) fn load_or_default<T>(path: &Path) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
{
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "store file missing, starting empty");
            return Ok(T::default());
        }
        Err(e) => return Err(StorageError::Io(e)),
    };

    match serde_json::from_str(&contents) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "store file malformed, starting empty"
            );
            Ok(T::default())
        }
    }
}

/// Rewrite a store file with the full collection.
pub(crate) fn save<T>(path: &Path, collection: &T) -> Result<(), StorageError>
where
    T: Serialize,
{
    let contents = serde_json::to_vec(collection)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Create the parent directory of a store file so a fresh deployment can
/// persist its first mutation.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
