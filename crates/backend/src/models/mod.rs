//! Domain models for Stockroom.
//!
//! These types represent validated domain objects separate from on-disk
//! record types.

pub mod credential;
pub mod product;

pub use credential::{Credential, CredentialRecord};
pub use product::Product;
