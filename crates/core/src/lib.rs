//! Stockroom Core - Shared types library.
//!
//! This crate provides common types used across all Stockroom components:
//! - `backend` - The application library (stores, config, models)
//! - `integration-tests` - Cross-store tests against real files
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, usernames, prices, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
