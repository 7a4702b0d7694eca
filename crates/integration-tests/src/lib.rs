//! Integration tests for Stockroom.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stockroom-integration-tests
//! ```
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=debug`) to see store logging during a run.
//!
//! # Test Categories
//!
//! - `credential_store` - Registration and authentication against real files
//! - `inventory_store` - Product CRUD and stock adjustment against real files
//! - `persistence` - On-disk formats, reloads, and round-trips

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Once;

use stockroom_backend::{App, AppConfig};

static INIT_TRACING: Once = Once::new();

/// Install a tracing subscriber honoring `RUST_LOG`, once per process.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A Stockroom application backed by a temporary data directory.
///
/// The directory lives as long as the harness; dropping it deletes the
/// store files.
pub struct TestApp {
    dir: tempfile::TempDir,
    /// The application under test.
    pub app: App,
}

impl TestApp {
    /// Open a fresh application in a new temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory or the stores cannot be created.
    #[must_use]
    pub fn new() -> Self {
        init_tracing();
        let dir = tempfile::tempdir().expect("create temp dir");
        let app = App::open(AppConfig::with_data_dir(dir.path())).expect("open app");
        Self { dir, app }
    }

    /// Reopen the application from the same directory, simulating a process
    /// restart.
    ///
    /// # Panics
    ///
    /// Panics if the stores cannot be reopened.
    pub fn reopen(&mut self) {
        self.app = App::open(AppConfig::with_data_dir(self.dir.path())).expect("reopen app");
    }

    /// Path of the credential file.
    #[must_use]
    pub fn users_file(&self) -> PathBuf {
        self.dir.path().join("users.json")
    }

    /// Path of the inventory file.
    #[must_use]
    pub fn inventory_file(&self) -> PathBuf {
        self.dir.path().join("inventory.json")
    }

    /// The credential file parsed as raw JSON.
    ///
    /// # Panics
    ///
    /// Panics if the file is missing or not valid JSON.
    #[must_use]
    pub fn raw_users_json(&self) -> serde_json::Value {
        let contents = std::fs::read_to_string(self.users_file()).expect("read users file");
        serde_json::from_str(&contents).expect("parse users file")
    }

    /// The inventory file parsed as raw JSON.
    ///
    /// # Panics
    ///
    /// Panics if the file is missing or not valid JSON.
    #[must_use]
    pub fn raw_inventory_json(&self) -> serde_json::Value {
        let contents = std::fs::read_to_string(self.inventory_file()).expect("read inventory file");
        serde_json::from_str(&contents).expect("parse inventory file")
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
