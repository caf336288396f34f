//! Personal keystore.
//!
//! Holds the user's own keypairs, one record per name, independent of any
//! repository.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::core::domain::Identity;
use crate::error::Result;

mod fs;

pub use fs::Filesystem;

/// Key storage trait.
///
/// Every identity returned by a store carries its private key.
pub trait Store {
    /// Generate and persist a new keypair named `name`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateName` if `name` is taken, or a
    /// `ValidationError` if it is not a usable key name.
    fn generate(&self, name: &str) -> Result<Identity>;

    /// All stored identities. An empty store yields an empty list.
    fn list(&self) -> Result<Vec<Identity>>;

    /// Look up one identity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there is no key named `name`.
    fn get(&self, name: &str) -> Result<Identity>;

    /// Delete one identity. Immediate and irreversible.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there is no key named `name`.
    fn remove(&self, name: &str) -> Result<()>;

    /// Check if a key named `name` exists.
    fn has(&self, name: &str) -> bool;
}
