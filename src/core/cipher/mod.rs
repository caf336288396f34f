//! Cryptographic operations.
//!
//! Provides the envelope abstraction and its age implementation. The engine
//! is pure: it never reads or writes the keystore or roster itself, callers
//! hand it recipient public keys or one private key.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::core::types::{Envelope, PublicKey};
use crate::error::Result;

mod age;

pub use self::age::{generate_identity, parse_identity, parse_recipient, public_key_of, Age};

/// Multi-recipient envelope encryption.
pub trait Cipher {
    /// Seal plaintext so that any one recipient's private key can open it.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::NoRecipients` for an empty recipient list and
    /// `CipherError::InvalidRecipient` naming the first key that does not parse.
    fn seal(&self, plaintext: &[u8], recipients: &[PublicKey]) -> Result<Envelope>;

    /// Open an envelope with a private key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the private key is malformed and
    /// `CipherError::Decryption` if the envelope is not addressed to it or
    /// fails authentication.
    fn open(&self, envelope: &[u8], private_key: &str) -> Result<Vec<u8>>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}

/// Seal plaintext for recipients with the default (binary) age backend.
pub fn seal(plaintext: &[u8], recipients: &[PublicKey]) -> Result<Envelope> {
    Age::default().seal(plaintext, recipients)
}

/// Open an envelope with the default age backend.
pub fn open(envelope: &[u8], private_key: &str) -> Result<Vec<u8>> {
    Age::default().open(envelope, private_key)
}
