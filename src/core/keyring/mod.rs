//! External keyring bridge.
//!
//! A narrow capability over an OS keyring program, used to move key material
//! in and out of it. The envelope engine never depends on this module.
//!
//! ## Adding a New Keyring
//!
//! 1. Implement the `Keyring` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::error::Result;

mod gpg;

pub use gpg::{parse_colons, Gpg};

/// One key known to the external keyring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyringKey {
    /// Short key id
    pub id: String,
    /// Full primary-key fingerprint
    pub fingerprint: String,
    /// User ids attached to the key, in listing order
    pub uids: Vec<String>,
}

impl KeyringKey {
    /// Whether `query` names this key by id, fingerprint, or a uid substring.
    /// A blank query names nothing.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        let upper = query.to_ascii_uppercase();
        self.id == upper
            || self.fingerprint == upper
            || self.fingerprint.ends_with(&upper)
            || self.uids.iter().any(|uid| uid.contains(query))
    }
}

/// Key management over an external keyring.
pub trait Keyring {
    /// Keys in the keyring. With `include_private`, only keys that have
    /// secret material are listed.
    fn list_keys(&self, include_private: bool) -> Result<Vec<KeyringKey>>;

    /// Export the public key `id` in armored form.
    ///
    /// # Errors
    ///
    /// Returns `KeyringError::NotFound` if nothing matches `id`.
    fn export(&self, id: &str) -> Result<Vec<u8>>;

    /// Import key material into the keyring.
    fn import(&self, material: &[u8]) -> Result<()>;

    /// Delete the key `id`, including its secret part if present.
    ///
    /// # Errors
    ///
    /// Returns `KeyringError::NotFound` if nothing matches `id`.
    fn delete(&self, id: &str) -> Result<()>;

    /// Program name for display/logging.
    fn name(&self) -> &str;
}
