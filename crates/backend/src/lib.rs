//! Stockroom application library.
//!
//! Two independent, file-backed collections behind a thin aggregate:
//!
//! - [`store::CredentialStore`] - username → (password, role) records with
//!   registration and authentication
//! - [`store::InventoryStore`] - product records with add/remove/list/search
//!   and stock adjustment under a non-negative floor
//!
//! Both stores load their whole collection into memory at construction,
//! mutate in memory, and rewrite the backing JSON file after every mutation.
//! The UI host constructs an [`App`] once at process start and drives the
//! stores through it; there are no module-global singletons.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod models;
pub mod store;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use models::{Credential, Product};
pub use store::{AuthError, CredentialStore, InventoryError, InventoryStore, StorageError};
